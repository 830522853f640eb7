//! Generic message and role types used by the *orprompt-core* crate.
//!
//! They mirror the concepts exposed by most chat-completion APIs and are
//! converted into provider-specific structs via `From`/`Into`.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Single chat message that is independent of any specific provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use orprompt_core::generic::{GenericMessage, GenericRole};
    ///
    /// let msg = GenericMessage::new("Summarise this.".into(), GenericRole::User);
    /// assert_eq!(msg.role, GenericRole::User);
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: message,
            role,
        }
    }

    pub fn user(message: impl Into<String>) -> Self {
        Self::new(message.into(), GenericRole::User)
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    System,
    Assistant,
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// Text answer of a single completion round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericChatCompletionResponse {
    /// Assistant text; empty when the provider omitted it.
    pub content: String,
    /// Model id reported by the provider, which may differ from the requested one.
    pub model: Option<String>,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
