//! Core ContentPipeline implementation

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Stage};
use crate::extract::BlockTextExtractor;
use crate::prompt::PromptBuilder;
use crate::writer::DocumentWriter;
use scribe_domain::{ActionKind, DocumentStore, ProcessOutcome, ProcessRequest, TextGenerator};
use std::sync::Arc;
use tracing::{debug, info};

/// Orchestrates one request through resolve → prompt → generate → append
///
/// The pipeline holds long-lived handles to the two external collaborators
/// and carries no per-request state; concurrent requests are independent
/// tasks. Every downstream failure is translated into exactly one
/// `PipelineError` kind at this boundary.
pub struct ContentPipeline<S, G>
where
    S: DocumentStore,
    G: TextGenerator,
{
    store: Arc<S>,
    generator: Arc<G>,
    extractor: BlockTextExtractor,
    prompts: PromptBuilder,
    writer: DocumentWriter,
}

impl<S, G> ContentPipeline<S, G>
where
    S: DocumentStore + Send + Sync,
    G: TextGenerator + Send + Sync,
{
    /// Create a pipeline over the given collaborators
    pub fn new(store: Arc<S>, generator: Arc<G>, config: PipelineConfig) -> Self {
        Self {
            store,
            generator,
            extractor: BlockTextExtractor::new(config.page_size),
            prompts: PromptBuilder::new(config.prompt_text_cap),
            writer: DocumentWriter::new(config.append_header),
        }
    }

    /// Process one validated request to completion or first failure
    pub async fn process(&self, request: ProcessRequest) -> Result<ProcessOutcome, PipelineError> {
        info!(
            action = %request.action,
            page_id = %request.page_id,
            append = request.append,
            "Processing request"
        );

        let (text, question) = self.resolve_content(&request).await?;
        debug!(stage = Stage::ResolveContent.as_str(), chars = text.len(), "Resolved source text");

        let prompt = self
            .prompts
            .build(request.action, &text, question.as_deref())?;
        debug!(stage = Stage::BuildPrompt.as_str(), chars = prompt.len(), "Built prompt");

        let output = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| PipelineError::Generation(e.to_string()))?;
        debug!(stage = Stage::Generate.as_str(), chars = output.len(), "Generated text");

        let appended = if request.append {
            self.writer
                .append(&*self.store, &request.page_id, request.action, &output)
                .await?;
            true
        } else {
            false
        };

        info!(appended, "Request complete");
        Ok(ProcessOutcome { output, appended })
    }

    /// Resolve the source text (and, for ask_question, the question)
    ///
    /// Non-empty caller content is used verbatim and suppresses extraction,
    /// except for ask_question, where the content is the question and the
    /// source text always comes from the page.
    async fn resolve_content(
        &self,
        request: &ProcessRequest,
    ) -> Result<(String, Option<String>), PipelineError> {
        let (text, question) = if request.action == ActionKind::AskQuestion {
            let question = request
                .trimmed_content()
                .ok_or(PipelineError::MissingQuestion)?
                .to_string();
            let text = self
                .extractor
                .extract(&*self.store, &request.page_id)
                .await?;
            (text, Some(question))
        } else if let Some(content) = request.trimmed_content() {
            (content.to_string(), None)
        } else {
            let text = self
                .extractor
                .extract(&*self.store, &request.page_id)
                .await?;
            (text, None)
        };

        if text.trim().is_empty() {
            return Err(PipelineError::EmptyContent);
        }

        Ok((text, question))
    }
}
