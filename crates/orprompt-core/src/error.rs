//! Unified error type exposed by **`orprompt-core`**.
//!
//! Provider crates convert their internal errors into [`OrPromptError::Backend`]
//! before bubbling them up to the [`OrPromptClient`](crate::client::OrPromptClient).
//! The binary only needs to tell three cases apart: a missing API key, an
//! exhausted fallback list, and everything else.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, OrPromptError>;

#[derive(Debug, Error)]
pub enum OrPromptError {
    /// No API key was configured for a live request.
    #[error("{var} is not set.")]
    MissingApiKey { var: &'static str },

    /// Generic forwarding of any backend-specific error.
    #[error("{0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Every candidate model failed. Only the error of the last attempt is kept.
    #[error("All models failed. Last error: {last}")]
    AllModelsFailed {
        #[source]
        last: Box<OrPromptError>,
    },
}
