use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
};

/// A **provider** turns chat parameters into a network call to a concrete
/// service and extracts the assistant's text from the reply.
///
/// One method, one non-streaming round-trip. Implementations must not retry
/// on their own; falling back to other models is the job of
/// [`OrPromptClient`](crate::client::OrPromptClient).
pub trait ChatCompletionProvider: Send + Sync {
    fn chat_complete<'p>(
        &'p self,
        params: ChatCompleteParameters,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>;
}

/// Everything a provider needs for one request.
///
/// Only [`Self::model`] changes between fallback attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompleteParameters {
    pub messages: Vec<GenericMessage>,
    pub model: String,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f64>,
}

impl ChatCompleteParameters {
    pub fn new(messages: Vec<GenericMessage>, model: impl Into<String>) -> Self {
        Self {
            messages,
            model: model.into(),
            temperature: None,
            max_tokens: None,
            top_p: None,
        }
    }

    pub fn messages(&self) -> &Vec<GenericMessage> {
        &self.messages
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }
}
