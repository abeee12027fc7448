//! Request module - the validated pipeline input and its outcome

use crate::action::ActionKind;

/// A validated request for one content transformation
///
/// Built by the HTTP layer after field validation; the pipeline never sees
/// an unparsed action or a missing page id.
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    /// The transformation to perform
    pub action: ActionKind,

    /// Caller-supplied source text, or the question for `ask_question`.
    /// When absent or blank the source text is extracted from `page_id`.
    pub content: Option<String>,

    /// Target page in the document store
    pub page_id: String,

    /// Whether the generated text is appended back to the page
    pub append: bool,
}

impl ProcessRequest {
    /// Create a request with the default append-back behavior
    pub fn new(action: ActionKind, page_id: impl Into<String>) -> Self {
        Self {
            action,
            content: None,
            page_id: page_id.into(),
            append: true,
        }
    }

    /// Set the caller-supplied content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set whether the result is appended back to the page
    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Caller-supplied content, trimmed, if non-blank
    pub fn trimmed_content(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// The result of one fully processed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Text returned by the generator
    pub output: String,

    /// Whether the text was appended back to the source page
    pub appended: bool,
}
