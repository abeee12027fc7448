//! Prompt templates for the supported actions

use crate::error::PipelineError;
use scribe_domain::ActionKind;

/// Renders an action's prompt from the resolved source text
///
/// The mapping is deterministic: one template per action, with the source
/// text interpolated verbatim (no escaping — the generator handles
/// arbitrary text). Text longer than the configured cap is prefix-cut
/// before interpolation.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    text_cap: Option<usize>,
}

impl PromptBuilder {
    /// Create a builder with the given truncation cap (`None` = uncapped)
    pub fn new(text_cap: Option<usize>) -> Self {
        Self { text_cap }
    }

    /// Render the prompt for `action` over `text`
    ///
    /// `question` is the caller's original content field; it is required by
    /// `ask_question` and ignored by every other action.
    pub fn build(
        &self,
        action: ActionKind,
        text: &str,
        question: Option<&str>,
    ) -> Result<String, PipelineError> {
        let text = self.capped(text);

        let prompt = match action {
            ActionKind::Summarize => format!(
                "Summarize the following text in a concise paragraph.\n\nText:\n{text}"
            ),
            ActionKind::Brainstorm => format!(
                "Brainstorm a list of ideas that build on the following notes.\n\nNotes:\n{text}"
            ),
            ActionKind::ActionItems => format!(
                "Extract the concrete action items from the following text as a bulleted list.\n\nText:\n{text}"
            ),
            ActionKind::Expand => format!(
                "Expand the following text with more detail and supporting points, keeping its tone.\n\nText:\n{text}"
            ),
            ActionKind::Rewrite => format!(
                "Rewrite the following text so it is clearer and better organized.\n\nText:\n{text}"
            ),
            ActionKind::Notes => format!(
                "Turn the following text into structured study notes with short headings.\n\nText:\n{text}"
            ),
            ActionKind::Quiz => format!(
                "Write a short quiz (questions followed by answers) covering the following text.\n\nText:\n{text}"
            ),
            ActionKind::AskQuestion => {
                let question = question
                    .map(str::trim)
                    .filter(|q| !q.is_empty())
                    .ok_or(PipelineError::MissingQuestion)?;
                format!(
                    "Answer the question using only the source text below.\n\nQuestion: {question}\n\nSource text:\n{text}"
                )
            }
            ActionKind::ImproveWriting => format!(
                "Improve the writing of the following text without changing its meaning.\n\nText:\n{text}"
            ),
            ActionKind::Rephrase => format!(
                "Rephrase the following text in a different voice while preserving its content.\n\nText:\n{text}"
            ),
        };

        Ok(prompt)
    }

    /// Prefix-cut to the cap; a plain character cut, not word-aware
    fn capped<'t>(&self, text: &'t str) -> std::borrow::Cow<'t, str> {
        match self.text_cap {
            Some(cap) if text.chars().count() > cap => {
                std::borrow::Cow::Owned(text.chars().take(cap).collect())
            }
            _ => std::borrow::Cow::Borrowed(text),
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(Some(15_000))
    }
}
