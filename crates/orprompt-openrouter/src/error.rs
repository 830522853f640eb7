use orprompt_core::error::OrPromptError;
use reqwest::{StatusCode, header::InvalidHeaderValue};

/// Longest excerpt of an error body kept in the message.
const BODY_EXCERPT_CHARS: usize = 200;

/// Every failure mode of a single OpenRouter round-trip.
#[derive(Debug, thiserror::Error)]
pub enum OpenRouterError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    /// `body` keeps the raw text; the message shows a one-line excerpt.
    #[error("OpenRouter returned non-success status {status}: {}", body_excerpt(.body))]
    Api { status: StatusCode, body: String },

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("{0}")]
    Format(String),
}

impl From<OpenRouterError> for OrPromptError {
    fn from(value: OpenRouterError) -> Self {
        OrPromptError::Backend(Box::new(value))
    }
}

/// Collapse all whitespace runs (newlines included) to single spaces and cap
/// the length.
fn body_excerpt(body: &str) -> String {
    let mut excerpt = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Some((cut, _)) = excerpt.char_indices().nth(BODY_EXCERPT_CHARS) {
        excerpt.truncate(cut);
        excerpt.push('…');
    }
    excerpt
}
