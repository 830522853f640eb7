use orprompt_core::{model::CandidateModels, provider::ChatCompleteParameters};
use orprompt_openrouter::api_v1::ChatCompletionRequest;
use serde::Serialize;

/// What `--dry-run` prints instead of calling the API.
#[derive(Debug, Serialize)]
pub struct DryRunReport<'a> {
    pub selected_model: &'a str,
    pub fallback_models: &'a [String],
    pub payload: ChatCompletionRequest,
}

impl<'a> DryRunReport<'a> {
    pub fn new(candidates: &'a CandidateModels, params: ChatCompleteParameters) -> Self {
        Self {
            selected_model: candidates.selected(),
            fallback_models: candidates.fallbacks(),
            payload: params.into(),
        }
    }

    /// Pretty JSON (two-space indent) with a trailing newline. Non-ASCII text
    /// is written as UTF-8, not `\u` escapes.
    pub fn render(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}
