//! Client that runs a completion against an ordered list of candidate models.
//!
//! ```text
//! TRYING(model 0) ──err──► TRYING(model 1) ──err──► … ──err──► FAILED
//!        │                        │
//!        └──ok──► SUCCEEDED ◄─────┘
//! ```
//!
//! No backoff, no jitter: each candidate gets exactly one attempt and only the
//! error of the last attempt survives.
use std::sync::Arc;

use crate::{
    error::{OrPromptError, Result},
    generic::GenericChatCompletionResponse,
    model::CandidateModels,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

/// A client bound to a single provider.
#[derive(Debug, Clone)]
pub struct OrPromptClient<B> {
    backend: Arc<B>,
}

/// Successful attempt of [`OrPromptClient::chat_complete_with_fallback`].
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackSuccess {
    /// Candidate that answered.
    pub model: String,
    pub response: GenericChatCompletionResponse,
}

impl<B> OrPromptClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Try `params` against every model in `candidates`, in order, until one
    /// succeeds.
    ///
    /// # Errors
    ///
    /// [`OrPromptError::AllModelsFailed`] wrapping the last attempt's error.
    pub async fn chat_complete_with_fallback(
        &self,
        candidates: &CandidateModels,
        mut params: ChatCompleteParameters,
    ) -> Result<FallbackSuccess> {
        let mut last_error = None;

        for model in candidates.iter() {
            params.model = model.to_owned();

            match self.backend.chat_complete(params.clone()).await {
                Ok(response) => {
                    return Ok(FallbackSuccess {
                        model: params.model,
                        response,
                    });
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!(model, error = %err, "model attempt failed, trying next candidate");
                    last_error = Some(err);
                }
            }
        }

        let last = last_error
            .unwrap_or_else(|| OrPromptError::InvalidRequest("no candidate models".into()));
        Err(OrPromptError::AllModelsFailed {
            last: Box::new(last),
        })
    }
}
