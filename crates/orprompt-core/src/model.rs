//! Model identifiers, aliases and candidate selection.
//!
//! OpenRouter addresses models by fully qualified `vendor/model` ids. The CLI
//! lets users pick one of three well-known models by a short alias, or hint
//! at it inside the prompt text (`use grok`, `model: gemini`, …). When
//! nothing is chosen, the [`DEFAULT_MODELS`] are tried in order.
//!
//! # Example
//!
//! ```rust
//! use orprompt_core::model::{ModelAlias, select_models};
//!
//! let selection = select_models(None, None, true, "Please use Grok for this.");
//! assert_eq!(selection.candidates.selected(), ModelAlias::Grok.model_id());
//! assert_eq!(selection.hint.as_deref(), Some("grok"));
//! ```

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::OrPromptError;

pub const GEMINI_3_FLASH_PREVIEW: &str = "google/gemini-3-flash-preview";
pub const GROK_4_1_FAST: &str = "x-ai/grok-4.1-fast";
pub const KIMI_K2_THINKING: &str = "moonshotai/kimi-k2-thinking";

/// Models tried in order when neither a model nor an alias was selected.
pub const DEFAULT_MODELS: &[&str] = &[GEMINI_3_FLASH_PREVIEW, GROK_4_1_FAST, KIMI_K2_THINKING];

static ALIAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(use|model)\s*[:=]?\s*(gemini|grok|kimi)\b")
        .expect("alias pattern is a valid regex")
});

/// Short, human-friendly name for one of the well-known models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelAlias {
    Gemini,
    Grok,
    Kimi,
}

impl ModelAlias {
    pub const ALL: [ModelAlias; 3] = [ModelAlias::Gemini, ModelAlias::Grok, ModelAlias::Kimi];

    /// The alias as typed on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            ModelAlias::Gemini => "gemini",
            ModelAlias::Grok => "grok",
            ModelAlias::Kimi => "kimi",
        }
    }

    /// Fully qualified OpenRouter model id.
    pub const fn model_id(self) -> &'static str {
        match self {
            ModelAlias::Gemini => GEMINI_3_FLASH_PREVIEW,
            ModelAlias::Grok => GROK_4_1_FAST,
            ModelAlias::Kimi => KIMI_K2_THINKING,
        }
    }
}

impl fmt::Display for ModelAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelAlias {
    type Err = OrPromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelAlias::ALL
            .into_iter()
            .find(|alias| alias.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| OrPromptError::InvalidRequest(format!("unknown model alias: `{s}`")))
    }
}

/// Scan free text for `use <alias>` / `model: <alias>` style hints.
///
/// Matching is case-insensitive and only whole words count; the first match
/// wins.
pub fn detect_alias(text: &str) -> Option<ModelAlias> {
    let captures = ALIAS_PATTERN.captures(text)?;
    captures.get(2)?.as_str().parse().ok()
}

/// Ordered, non-empty list of model ids to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateModels(Vec<String>);

impl CandidateModels {
    pub fn single(model: impl Into<String>) -> Self {
        Self(vec![model.into()])
    }

    pub fn defaults() -> Self {
        Self(DEFAULT_MODELS.iter().map(|m| (*m).to_owned()).collect())
    }

    /// The model tried first.
    pub fn selected(&self) -> &str {
        &self.0[0]
    }

    /// Models tried after [`Self::selected`], in order.
    pub fn fallbacks(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Result of [`select_models`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub candidates: CandidateModels,
    /// What to embed into the prompt when annotation is requested: the
    /// explicit model id, otherwise the alias name.
    pub hint: Option<String>,
}

/// Resolve the candidate list.
///
/// Priority: explicit model, then alias, then (if `auto_detect`) an alias
/// found in `prompt`, then [`DEFAULT_MODELS`]. Empty model strings count as
/// absent.
pub fn select_models(
    explicit_model: Option<&str>,
    alias: Option<ModelAlias>,
    auto_detect: bool,
    prompt: &str,
) -> ModelSelection {
    let explicit_model = explicit_model.filter(|m| !m.is_empty());
    let alias = alias.or_else(|| auto_detect.then(|| detect_alias(prompt)).flatten());

    if let Some(model) = explicit_model {
        return ModelSelection {
            candidates: CandidateModels::single(model),
            hint: Some(model.to_owned()),
        };
    }

    match alias {
        Some(alias) => ModelSelection {
            candidates: CandidateModels::single(alias.model_id()),
            hint: Some(alias.name().to_owned()),
        },
        None => ModelSelection {
            candidates: CandidateModels::defaults(),
            hint: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alias_resolves_to_a_single_fixed_id() {
        let expected = [
            (ModelAlias::Gemini, "google/gemini-3-flash-preview"),
            (ModelAlias::Grok, "x-ai/grok-4.1-fast"),
            (ModelAlias::Kimi, "moonshotai/kimi-k2-thinking"),
        ];
        for (alias, id) in expected {
            let selection = select_models(None, Some(alias), false, "");
            assert_eq!(selection.candidates.len(), 1);
            assert_eq!(selection.candidates.selected(), id);
            assert_eq!(selection.hint.as_deref(), Some(alias.name()));
        }
    }

    #[test]
    fn no_flags_yields_default_list_in_order() {
        let selection = select_models(None, None, false, "use grok please");
        let models: Vec<&str> = selection.candidates.iter().collect();
        assert_eq!(models, DEFAULT_MODELS);
        assert_eq!(selection.candidates.selected(), GEMINI_3_FLASH_PREVIEW);
        assert_eq!(selection.candidates.fallbacks(), [GROK_4_1_FAST, KIMI_K2_THINKING]);
        assert_eq!(selection.hint, None);
    }

    #[test]
    fn explicit_model_beats_alias_and_detection() {
        let selection = select_models(
            Some("openai/gpt-4o"),
            Some(ModelAlias::Kimi),
            true,
            "model: gemini",
        );
        let models: Vec<&str> = selection.candidates.iter().collect();
        assert_eq!(models, ["openai/gpt-4o"]);
        assert_eq!(selection.hint.as_deref(), Some("openai/gpt-4o"));
    }

    #[test]
    fn alias_flag_beats_detection() {
        let selection = select_models(None, Some(ModelAlias::Kimi), true, "use grok");
        assert_eq!(selection.candidates.selected(), KIMI_K2_THINKING);
    }

    #[test]
    fn empty_explicit_model_is_ignored() {
        let selection = select_models(Some(""), None, false, "");
        assert_eq!(selection.candidates, CandidateModels::defaults());
    }

    #[test]
    fn detects_alias_in_any_casing() {
        assert_eq!(detect_alias("Please Use Grok here"), Some(ModelAlias::Grok));
        assert_eq!(detect_alias("USE GROK"), Some(ModelAlias::Grok));
        assert_eq!(detect_alias("model: gemini"), Some(ModelAlias::Gemini));
        assert_eq!(detect_alias("model=kimi"), Some(ModelAlias::Kimi));
        assert_eq!(detect_alias("use   kimi"), Some(ModelAlias::Kimi));
    }

    #[test]
    fn detection_requires_whole_words() {
        assert_eq!(detect_alias("abuse grok"), None);
        assert_eq!(detect_alias("use grokking"), None);
        assert_eq!(detect_alias("a gemini prompt"), None);
        assert_eq!(detect_alias("nothing to see here"), None);
    }

    #[test]
    fn auto_detect_without_match_falls_back_to_defaults() {
        let selection = select_models(None, None, true, "write a haiku");
        assert_eq!(selection.candidates, CandidateModels::defaults());
        assert_eq!(selection.hint, None);
    }

    #[test]
    fn parses_alias_names() {
        assert_eq!("grok".parse::<ModelAlias>().unwrap(), ModelAlias::Grok);
        assert_eq!("Gemini".parse::<ModelAlias>().unwrap(), ModelAlias::Gemini);
        assert!("claude".parse::<ModelAlias>().is_err());
    }
}
