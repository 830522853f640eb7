//! Provider-agnostic building blocks of **orprompt**.
//!
//! | Module       | What it provides                                              |
//! |--------------|---------------------------------------------------------------|
//! | [`model`]    | alias table, default model list, candidate selection          |
//! | [`generic`]  | provider-independent messages and responses                   |
//! | [`provider`] | the [`ChatCompletionProvider`](provider::ChatCompletionProvider) seam |
//! | [`client`]   | [`OrPromptClient`], which walks the fallback list              |
//! | [`error`]    | [`OrPromptError`](error::OrPromptError)                        |
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;

pub use client::{FallbackSuccess, OrPromptClient};
