//! Error types for the content pipeline

use thiserror::Error;

/// The stages a request moves through, in order
///
/// Each error kind belongs to exactly one stage, which makes partial
/// failure ("generated but not appended") a first-class outcome instead of
/// an accident of propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolving the source text (caller-supplied or extracted)
    ResolveContent,
    /// Rendering the action's prompt template
    BuildPrompt,
    /// Calling the generator
    Generate,
    /// Appending the result back to the page
    Append,
}

impl Stage {
    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ResolveContent => "resolve_content",
            Stage::BuildPrompt => "build_prompt",
            Stage::Generate => "generate",
            Stage::Append => "append",
        }
    }
}

/// Errors that can occur while processing a request
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The resolved source text was empty or whitespace-only
    #[error("Resolved content is empty")]
    EmptyContent,

    /// ask_question was requested without a question
    #[error("The ask_question action requires a question in the content field")]
    MissingQuestion,

    /// Reading the page's blocks from the store failed
    #[error("Failed to extract content from page {page_id}: {message}")]
    Extraction {
        /// Page whose children could not be listed
        page_id: String,
        /// Underlying store error message
        message: String,
    },

    /// The generator call failed
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Appending the generated text back to the page failed
    #[error("Failed to append to page {page_id}: {message}")]
    Append {
        /// Page the append was addressed to
        page_id: String,
        /// Underlying store error message
        message: String,
        /// The already-generated text, so the caller keeps the result
        generated: String,
    },
}

impl PipelineError {
    /// The stage this error terminated the request in
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::EmptyContent
            | PipelineError::Extraction { .. } => Stage::ResolveContent,
            PipelineError::MissingQuestion => Stage::BuildPrompt,
            PipelineError::Generation(_) => Stage::Generate,
            PipelineError::Append { .. } => Stage::Append,
        }
    }

    /// Generated text salvaged from a partial failure, if any
    pub fn generated_text(&self) -> Option<&str> {
        match self {
            PipelineError::Append { generated, .. } => Some(generated),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_map_to_stages() {
        assert_eq!(PipelineError::EmptyContent.stage(), Stage::ResolveContent);
        assert_eq!(PipelineError::MissingQuestion.stage(), Stage::BuildPrompt);
        assert_eq!(
            PipelineError::Generation("x".into()).stage(),
            Stage::Generate
        );
        assert_eq!(
            PipelineError::Append {
                page_id: "p".into(),
                message: "x".into(),
                generated: "out".into(),
            }
            .stage(),
            Stage::Append
        );
    }

    #[test]
    fn test_append_failure_keeps_generated_text() {
        let err = PipelineError::Append {
            page_id: "p".into(),
            message: "store down".into(),
            generated: "Summary.".into(),
        };
        assert_eq!(err.generated_text(), Some("Summary."));
        assert_eq!(PipelineError::EmptyContent.generated_text(), None);
    }

    #[test]
    fn test_extraction_error_names_page() {
        let err = PipelineError::Extraction {
            page_id: "P1".into(),
            message: "HTTP 404".into(),
        };
        let text = err.to_string();
        assert!(text.contains("P1"));
        assert!(text.contains("HTTP 404"));
    }
}
