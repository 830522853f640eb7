//! Embed the preferred model into the prompt text itself.
//!
//! Two shapes are supported:
//!
//! * **Structured prompts** wrapped in `<meta_prompt …>` get a
//!   `<model_hint>` child right after the opening tag:
//!
//!   ```rust
//!   use orprompt_prompt::insert_model_hint;
//!
//!   let out = insert_model_hint("<meta_prompt version=\"1\">body</meta_prompt>", "grok");
//!   assert_eq!(
//!       out,
//!       "<meta_prompt version=\"1\">\n  <model_hint>grok</model_hint>body</meta_prompt>"
//!   );
//!   ```
//!
//! * **Plain prompts** get a `Model preference: …` line in front.
//!
//! This is text splicing only: nothing checks that the result is well-formed
//! markup.

use std::fmt::Write as _;

use orprompt_core::model::ModelSelection;

const META_PROMPT_MARKER: &str = "<meta_prompt";

/// Insert `hint` into `prompt`. An empty hint leaves the prompt untouched.
pub fn insert_model_hint(prompt: &str, hint: &str) -> String {
    if hint.is_empty() {
        return prompt.to_owned();
    }

    let tag_end = prompt.find(META_PROMPT_MARKER).and_then(|start| {
        prompt[start..]
            .find('>')
            .map(|offset| start + offset + 1)
    });

    let mut annotated = String::with_capacity(prompt.len() + hint.len() + 32);
    match tag_end {
        Some(split) => {
            annotated.push_str(&prompt[..split]);
            write!(annotated, "\n  <model_hint>{hint}</model_hint>").expect("failed to write buffer");
            annotated.push_str(&prompt[split..]);
        }
        None => {
            writeln!(annotated, "Model preference: {hint}").expect("failed to write buffer");
            annotated.push_str(prompt);
        }
    }
    annotated
}

/// Annotate `prompt` with the hint of `selection`, if it has one.
///
/// Selections that fell back to the default model list carry no hint and
/// return the prompt unchanged.
pub fn annotate_model_hint(prompt: &str, selection: &ModelSelection) -> String {
    match selection.hint.as_deref() {
        Some(hint) => insert_model_hint(prompt, hint),
        None => prompt.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use orprompt_core::model::{ModelAlias, select_models};

    use super::*;

    #[test]
    fn splices_after_opening_meta_prompt_tag() {
        let prompt = "<meta_prompt version=\"1\">\n  <task>Write copy</task>\n</meta_prompt>";
        let hint = "gemini";

        let out = insert_model_hint(prompt, hint);

        let inserted = format!("\n  <model_hint>{hint}</model_hint>");
        let split = prompt.find('>').unwrap() + 1;
        assert_eq!(out.len(), prompt.len() + inserted.len());
        assert_eq!(&out[..split], &prompt[..split]);
        assert_eq!(&out[split..split + inserted.len()], inserted);
        assert_eq!(&out[split + inserted.len()..], &prompt[split..]);
    }

    #[test]
    fn only_considers_angle_brackets_after_the_marker() {
        let prompt = "a > b\n<meta_prompt>x</meta_prompt>";

        let out = insert_model_hint(prompt, "kimi");

        assert_eq!(
            out,
            "a > b\n<meta_prompt>\n  <model_hint>kimi</model_hint>x</meta_prompt>"
        );
    }

    #[test]
    fn unterminated_marker_falls_back_to_preference_line() {
        let prompt = "broken <meta_prompt version=\"1\"";
        assert_eq!(
            insert_model_hint(prompt, "grok"),
            format!("Model preference: grok\n{prompt}")
        );
    }

    #[test]
    fn plain_prompt_gets_preference_line() {
        let prompt = "Write a tagline for a coffee shop.";
        let out = insert_model_hint(prompt, "x-ai/grok-4.1-fast");
        assert_eq!(out, format!("Model preference: x-ai/grok-4.1-fast\n{prompt}"));
    }

    #[test]
    fn empty_hint_is_a_no_op() {
        assert_eq!(insert_model_hint("<meta_prompt>x", ""), "<meta_prompt>x");
    }

    #[test]
    fn default_selection_has_nothing_to_annotate() {
        let selection = select_models(None, None, false, "hello");
        assert_eq!(annotate_model_hint("hello", &selection), "hello");
    }

    #[test]
    fn alias_selection_uses_alias_name() {
        let selection = select_models(None, Some(ModelAlias::Grok), false, "hello");
        assert_eq!(
            annotate_model_hint("hello", &selection),
            "Model preference: grok\nhello"
        );
    }
}
