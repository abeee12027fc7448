//! Flattening a page's paginated block tree into plain text

use crate::error::PipelineError;
use scribe_domain::{BlockType, ContentBlock, DocumentStore};
use tracing::debug;

/// Lazy paginator over a block's direct children
///
/// Produces one listing page per `next_page` call and stops after the store
/// reports a null continuation token, so callers can cap the number of
/// pages fetched without changing the extraction contract.
pub struct ChildPager<'a, S: DocumentStore> {
    store: &'a S,
    block_id: &'a str,
    page_size: u32,
    cursor: Option<String>,
    done: bool,
}

impl<'a, S: DocumentStore + Sync> ChildPager<'a, S> {
    /// Start a pager at the beginning of a block's child sequence
    pub fn new(store: &'a S, block_id: &'a str, page_size: u32) -> Self {
        Self {
            store,
            block_id,
            page_size,
            cursor: None,
            done: false,
        }
    }

    /// Fetch the next listing page, or `None` past the end of the sequence
    ///
    /// A fetch error ends the sequence; there is no partial resume.
    pub async fn next_page(&mut self) -> Option<Result<Vec<ContentBlock>, S::Error>> {
        if self.done {
            return None;
        }

        match self
            .store
            .list_children(self.block_id, self.cursor.as_deref(), self.page_size)
            .await
        {
            Ok(page) => {
                self.cursor = page.next_cursor;
                if self.cursor.is_none() {
                    self.done = true;
                }
                Some(Ok(page.results))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Flattens a page's block children into plain text
#[derive(Debug, Clone, Copy)]
pub struct BlockTextExtractor {
    page_size: u32,
}

impl BlockTextExtractor {
    /// Create an extractor fetching the given number of blocks per page
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }

    /// Retrieve and flatten all direct children of `page_id`
    ///
    /// Recognized block types contribute their spans' plain text terminated
    /// by a newline, in retrieval order; unrecognized types are skipped. A
    /// page with no recognized blocks yields an empty string.
    pub async fn extract<S>(&self, store: &S, page_id: &str) -> Result<String, PipelineError>
    where
        S: DocumentStore + Sync,
    {
        let mut pager = ChildPager::new(store, page_id, self.page_size);
        let mut text = String::new();
        let mut pages_fetched = 0usize;
        let mut blocks_seen = 0usize;

        while let Some(fetched) = pager.next_page().await {
            let blocks = fetched.map_err(|e| PipelineError::Extraction {
                page_id: page_id.to_string(),
                message: e.to_string(),
            })?;

            pages_fetched += 1;
            blocks_seen += blocks.len();

            for block in &blocks {
                if let Some(contribution) = block_text(block) {
                    text.push_str(&contribution);
                    text.push('\n');
                }
            }
        }

        debug!(
            page_id,
            pages_fetched,
            blocks_seen,
            chars = text.len(),
            "Extracted page text"
        );

        Ok(text)
    }
}

impl Default for BlockTextExtractor {
    fn default() -> Self {
        Self::new(100)
    }
}

/// The block-type-to-text policy
///
/// `None` means the block contributes nothing; that is a policy choice,
/// not an error.
fn block_text(block: &ContentBlock) -> Option<String> {
    match block.block_type {
        BlockType::Paragraph
        | BlockType::Heading1
        | BlockType::Heading2
        | BlockType::Heading3 => Some(block.plain_text()),
        BlockType::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_domain::RichText;
    use scribe_store::MemoryStore;

    fn other_block(tag: &str, text: &str) -> ContentBlock {
        ContentBlock {
            id: None,
            block_type: BlockType::Other(tag.to_string()),
            rich_text: vec![RichText::new(text)],
        }
    }

    #[tokio::test]
    async fn test_single_page_extraction() {
        let store = MemoryStore::with_pages(vec![vec![
            ContentBlock::heading(1, "Title"),
            ContentBlock::paragraph("First paragraph."),
            ContentBlock::paragraph("Second paragraph."),
        ]]);

        let text = BlockTextExtractor::default()
            .extract(&store, "page-1")
            .await
            .unwrap();
        assert_eq!(text, "Title\nFirst paragraph.\nSecond paragraph.\n");
    }

    #[tokio::test]
    async fn test_pagination_does_not_change_flattening() {
        let blocks = vec![
            ContentBlock::paragraph("a"),
            ContentBlock::heading(2, "b"),
            ContentBlock::paragraph("c"),
            ContentBlock::heading(3, "d"),
        ];

        let one_page = MemoryStore::with_pages(vec![blocks.clone()]);
        let many_pages =
            MemoryStore::with_pages(blocks.iter().map(|b| vec![b.clone()]).collect());

        let extractor = BlockTextExtractor::default();
        let flat_one = extractor.extract(&one_page, "p").await.unwrap();
        let flat_many = extractor.extract(&many_pages, "p").await.unwrap();

        assert_eq!(flat_one, flat_many);
        assert_eq!(flat_one, "a\nb\nc\nd\n");
        assert_eq!(many_pages.list_calls(), 4);
    }

    #[tokio::test]
    async fn test_unrecognized_types_are_skipped() {
        let store = MemoryStore::with_pages(vec![vec![
            other_block("to_do", "task one"),
            ContentBlock::paragraph("kept"),
            other_block("image", ""),
            other_block("bulleted_list_item", "bullet"),
        ]]);

        let text = BlockTextExtractor::default()
            .extract(&store, "p")
            .await
            .unwrap();
        assert_eq!(text, "kept\n");
    }

    #[tokio::test]
    async fn test_empty_page_yields_empty_string() {
        let store = MemoryStore::new();
        let text = BlockTextExtractor::default()
            .extract(&store, "p")
            .await
            .unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_fetch_failure_wraps_page_id() {
        let store = MemoryStore::new();
        store.fail_listing("HTTP 401: unauthorized");

        let err = BlockTextExtractor::default()
            .extract(&store, "page-9")
            .await
            .unwrap_err();

        match err {
            PipelineError::Extraction { page_id, message } => {
                assert_eq!(page_id, "page-9");
                assert!(message.contains("unauthorized"));
            }
            other => panic!("expected Extraction error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_pager_is_lazy() {
        let store = MemoryStore::with_pages(vec![
            vec![ContentBlock::paragraph("a")],
            vec![ContentBlock::paragraph("b")],
        ]);

        let mut pager = ChildPager::new(&store, "p", 100);
        assert_eq!(store.list_calls(), 0);

        pager.next_page().await.unwrap().unwrap();
        assert_eq!(store.list_calls(), 1);

        pager.next_page().await.unwrap().unwrap();
        assert!(pager.next_page().await.is_none());
        assert_eq!(store.list_calls(), 2);
    }
}
