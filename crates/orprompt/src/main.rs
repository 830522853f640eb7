use std::{io::IsTerminal, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use orprompt_core::{OrPromptClient, error::OrPromptError, model::select_models};
use orprompt_openrouter::OpenRouterAdapterBuilder;
use orprompt_prompt::annotate_model_hint;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, dry_run::DryRunReport};

mod cli;
mod dry_run;
mod io;

const EXIT_ALL_MODELS_FAILED: u8 = 1;
const EXIT_MISSING_API_KEY: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    let prompt = io::read_prompt(cli.input.as_deref())?;

    let selection = select_models(
        cli.model.as_deref(),
        cli.model_alias(),
        cli.auto_model_from_text,
        &prompt,
    );
    tracing::debug!(
        selected = selection.candidates.selected(),
        fallbacks = ?selection.candidates.fallbacks(),
        "resolved candidate models"
    );

    let prompt = if cli.include_model_in_prompt {
        annotate_model_hint(&prompt, &selection)
    } else {
        prompt
    };

    let params = cli.parameters(selection.candidates.selected(), prompt);

    if cli.dry_run {
        let report = DryRunReport::new(&selection.candidates, params).render()?;
        print!("{report}");
        return Ok(ExitCode::SUCCESS);
    }

    let backend = match OpenRouterAdapterBuilder::new_from_env().build() {
        Ok(backend) => backend,
        Err(err @ OrPromptError::MissingApiKey { .. }) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(EXIT_MISSING_API_KEY));
        }
        Err(err) => return Err(err.into()),
    };
    let client = OrPromptClient::new(backend);

    match client
        .chat_complete_with_fallback(&selection.candidates, params)
        .await
    {
        Ok(success) => {
            if let Some(usage) = success.response.usage {
                tracing::debug!(
                    model = %success.model,
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    total_tokens = usage.total_tokens,
                    "completion succeeded"
                );
            }
            io::write_response(cli.output.as_deref(), &success.response.content)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::from(EXIT_ALL_MODELS_FAILED))
        }
    }
}

/// Logs go to stderr so stdout only ever carries the model's answer.
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
