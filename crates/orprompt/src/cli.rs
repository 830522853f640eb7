use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use orprompt_core::{
    generic::GenericMessage, model::ModelAlias, provider::ChatCompleteParameters,
};

#[derive(Debug, Parser)]
#[command(name = "orprompt")]
#[command(about = "Call OpenRouter chat completions with a prompt.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to prompt file. If omitted, reads stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write response content to this file.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Explicit model id to use.
    #[arg(long)]
    pub model: Option<String>,

    /// Use a model alias.
    #[arg(long, value_enum)]
    pub model_alias: Option<AliasArg>,

    /// Detect model alias in the prompt text.
    #[arg(long)]
    pub auto_model_from_text: bool,

    /// Insert the model hint into the prompt.
    #[arg(long)]
    pub include_model_in_prompt: bool,

    #[arg(long, default_value_t = 0.4)]
    pub temperature: f64,

    #[arg(long, default_value_t = 1400)]
    pub max_tokens: u32,

    #[arg(long, default_value_t = 0.9)]
    pub top_p: f64,

    /// Print payload and exit without sending.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AliasArg {
    Gemini,
    Grok,
    Kimi,
}

impl From<AliasArg> for ModelAlias {
    fn from(value: AliasArg) -> Self {
        match value {
            AliasArg::Gemini => ModelAlias::Gemini,
            AliasArg::Grok => ModelAlias::Grok,
            AliasArg::Kimi => ModelAlias::Kimi,
        }
    }
}

impl Cli {
    pub fn model_alias(&self) -> Option<ModelAlias> {
        self.model_alias.map(Into::into)
    }

    /// Request parameters for `model`; sampling settings come from the flags.
    pub fn parameters(&self, model: &str, prompt: String) -> ChatCompleteParameters {
        ChatCompleteParameters::new(vec![GenericMessage::user(prompt)], model)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_top_p(self.top_p)
    }
}
