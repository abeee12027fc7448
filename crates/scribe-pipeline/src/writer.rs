//! Converting generated text back into appendable blocks

use crate::error::PipelineError;
use scribe_domain::{ActionKind, ContentBlock, DocumentStore};
use tracing::debug;

/// Appends generated text to a page as new blocks
///
/// The generated text becomes a single paragraph block — no markdown
/// parsing, formatting characters pass through literally — optionally
/// preceded by a paragraph header carrying the action's label. The append
/// is one store call and is not transactional; post-append state is not
/// verified.
#[derive(Debug, Clone, Copy)]
pub struct DocumentWriter {
    append_header: bool,
}

impl DocumentWriter {
    /// Create a writer; `append_header` controls the labeled header block
    pub fn new(append_header: bool) -> Self {
        Self { append_header }
    }

    /// Build the block list for one append
    pub fn blocks(&self, action: ActionKind, text: &str) -> Vec<ContentBlock> {
        let mut blocks = Vec::with_capacity(2);
        if self.append_header {
            blocks.push(ContentBlock::paragraph(action.label()));
        }
        blocks.push(ContentBlock::paragraph(text));
        blocks
    }

    /// Append `text` to `page_id` in one store call
    pub async fn append<S>(
        &self,
        store: &S,
        page_id: &str,
        action: ActionKind,
        text: &str,
    ) -> Result<(), PipelineError>
    where
        S: DocumentStore + Sync,
    {
        let blocks = self.blocks(action, text);

        store
            .append_children(page_id, &blocks)
            .await
            .map_err(|e| PipelineError::Append {
                page_id: page_id.to_string(),
                message: e.to_string(),
                generated: text.to_string(),
            })?;

        debug!(page_id, blocks = blocks.len(), "Appended generated text");
        Ok(())
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_domain::BlockType;
    use scribe_store::MemoryStore;

    #[test]
    fn test_blocks_with_header() {
        let blocks = DocumentWriter::new(true).blocks(ActionKind::Summarize, "Summary.");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].plain_text(), "Summary");
        assert_eq!(blocks[1].plain_text(), "Summary.");
        assert!(blocks.iter().all(|b| b.block_type == BlockType::Paragraph));
    }

    #[test]
    fn test_blocks_without_header() {
        let blocks = DocumentWriter::new(false).blocks(ActionKind::Quiz, "Q1: ...");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].plain_text(), "Q1: ...");
    }

    #[test]
    fn test_formatting_passes_through_literally() {
        let text = "## Heading\n- **bold** item";
        let blocks = DocumentWriter::new(false).blocks(ActionKind::Notes, text);
        assert_eq!(blocks[0].plain_text(), text);
    }

    #[tokio::test]
    async fn test_append_is_one_store_call() {
        let store = MemoryStore::new();
        DocumentWriter::default()
            .append(&store, "P1", ActionKind::Brainstorm, "ideas")
            .await
            .unwrap();

        assert_eq!(store.append_calls(), 1);
        let appended = store.appended();
        assert_eq!(appended[0].0, "P1");
        assert_eq!(appended[0].1.len(), 2);
    }

    #[tokio::test]
    async fn test_append_failure_carries_text_and_page() {
        let store = MemoryStore::new();
        store.fail_append("write denied");

        let err = DocumentWriter::default()
            .append(&store, "P2", ActionKind::Summarize, "Summary.")
            .await
            .unwrap_err();

        match err {
            PipelineError::Append {
                page_id,
                message,
                generated,
            } => {
                assert_eq!(page_id, "P2");
                assert!(message.contains("write denied"));
                assert_eq!(generated, "Summary.");
            }
            other => panic!("expected Append error, got {other:?}"),
        }
    }
}
