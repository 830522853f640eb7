use orprompt_core::generic::{GenericChatCompletionResponse, GenericMessage, GenericRole};
use orprompt_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::OpenRouterError;

use super::common::Usage;

/// Body of `POST /chat/completions`.
///
/// Field order is the serialised order: `model, messages, temperature,
/// max_tokens, top_p`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            max_tokens: None,
            top_p: None,
        }
    }
}

impl From<ChatCompleteParameters> for ChatCompletionRequest {
    fn from(value: ChatCompleteParameters) -> Self {
        Self {
            model: value.model,
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            max_tokens: value.max_tokens,
            top_p: value.top_p,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

// Only `choices[0].message.content` matters. A missing message or content
// key reads as empty text, an explicit `null` fails the attempt.

/// `None` when the key is absent, `Some(None)` when it is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatCompletionMessageForResponse {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    #[serde(default)]
    pub index: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    pub message: Option<Option<ChatCompletionMessageForResponse>>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<ChatCompletionChoice>>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Parse a raw response body.
    pub fn from_body(body: &str) -> Result<Self, OpenRouterError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Extract the first choice's text.
    ///
    /// # Errors
    ///
    /// [`OpenRouterError::Format`] when `choices` is absent or empty, or when
    /// the first choice's `message` or `content` is `null`.
    pub fn into_generic(self) -> Result<GenericChatCompletionResponse, OpenRouterError> {
        let Some(first_choice) = self.choices.and_then(|choices| choices.into_iter().next())
        else {
            return Err(OpenRouterError::Format("No choices returned".into()));
        };

        let content = match first_choice.message {
            None => String::new(),
            Some(None) => return Err(OpenRouterError::Format("Choice message is null".into())),
            Some(Some(message)) => match message.content {
                None => String::new(),
                Some(None) => {
                    return Err(OpenRouterError::Format("Message content is null".into()));
                }
                Some(Some(content)) => content,
            },
        };

        Ok(GenericChatCompletionResponse {
            content,
            model: self.model,
            usage: self.usage.map(Into::into),
        })
    }
}
