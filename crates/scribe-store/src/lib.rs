//! Scribe Document Store Layer
//!
//! Implementations of the `DocumentStore` trait from `scribe-domain`.
//!
//! # Implementations
//!
//! - `MemoryStore`: deterministic in-memory double for testing
//! - `NotionStore`: HTTP client for a Notion-style block API
//!
//! # Examples
//!
//! ```
//! use scribe_store::MemoryStore;
//! use scribe_domain::{ContentBlock, DocumentStore};
//!
//! # async fn example() {
//! let store = MemoryStore::with_pages(vec![vec![ContentBlock::paragraph("Hello")]]);
//! let page = store.list_children("page-1", None, 100).await.unwrap();
//! assert_eq!(page.results.len(), 1);
//! assert!(page.next_cursor.is_none());
//! # }
//! ```

#![warn(missing_docs)]

pub mod notion;

use async_trait::async_trait;
use scribe_domain::{BlockPage, ContentBlock, DocumentStore};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use notion::NotionStore;

/// Errors that can occur talking to the document store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network or transport failure
    #[error("Store request failed: {0}")]
    Http(String),

    /// The store rejected the request
    #[error("Store API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the store
        status: u16,
        /// Error body or status text
        message: String,
    },

    /// The store returned a body this client could not parse
    #[error("Invalid store response: {0}")]
    InvalidResponse(String),

    /// Generic error (used by test doubles)
    #[error("Store error: {0}")]
    Other(String),
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    pages: Vec<Vec<ContentBlock>>,
    appended: Vec<(String, Vec<ContentBlock>)>,
    list_calls: usize,
    append_calls: usize,
    fail_listing: Option<String>,
    fail_append: Option<String>,
}

/// In-memory document store double with scripted listing pages
///
/// Each element of the scripted page list is returned as one paginated
/// response; cursors chain the pages together and the last page carries no
/// cursor. Appends are recorded for inspection, and either operation can be
/// made to fail on demand.
///
/// Clones share state, so a test can keep a handle while the code under
/// test owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

impl MemoryStore {
    /// Create an empty store (one empty listing page)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose listing returns exactly the given pages
    pub fn with_pages(pages: Vec<Vec<ContentBlock>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryStoreInner {
                pages,
                ..Default::default()
            })),
        }
    }

    /// Make every `list_children` call fail with the given message
    pub fn fail_listing(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_listing = Some(message.into());
    }

    /// Make every `append_children` call fail with the given message
    pub fn fail_append(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_append = Some(message.into());
    }

    /// All recorded appends, as (block id, blocks) pairs
    pub fn appended(&self) -> Vec<(String, Vec<ContentBlock>)> {
        self.inner.lock().unwrap().appended.clone()
    }

    /// Number of `list_children` calls made so far
    pub fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }

    /// Number of `append_children` calls made so far
    pub fn append_calls(&self) -> usize {
        self.inner.lock().unwrap().append_calls
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    type Error = StoreError;

    async fn list_children(
        &self,
        _block_id: &str,
        cursor: Option<&str>,
        _page_size: u32,
    ) -> Result<BlockPage, Self::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;

        if let Some(message) = &inner.fail_listing {
            return Err(StoreError::Other(message.clone()));
        }

        // Cursors are "cursor-<index>" into the scripted page list
        let index = match cursor {
            None => 0,
            Some(token) => token
                .strip_prefix("cursor-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| StoreError::Other(format!("bad cursor: {token}")))?,
        };

        let results = inner.pages.get(index).cloned().unwrap_or_default();
        let next_cursor = if index + 1 < inner.pages.len() {
            Some(format!("cursor-{}", index + 1))
        } else {
            None
        };

        Ok(BlockPage {
            results,
            next_cursor,
        })
    }

    async fn append_children(
        &self,
        block_id: &str,
        blocks: &[ContentBlock],
    ) -> Result<(), Self::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.append_calls += 1;

        if let Some(message) = &inner.fail_append {
            return Err(StoreError::Other(message.clone()));
        }

        inner
            .appended
            .push((block_id.to_string(), blocks.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_returns_empty_page() {
        let store = MemoryStore::new();
        let page = store.list_children("p", None, 100).await.unwrap();
        assert!(page.results.is_empty());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_cursor_chain_over_scripted_pages() {
        let store = MemoryStore::with_pages(vec![
            vec![ContentBlock::paragraph("a")],
            vec![ContentBlock::paragraph("b")],
            vec![ContentBlock::paragraph("c")],
        ]);

        let first = store.list_children("p", None, 100).await.unwrap();
        assert_eq!(first.next_cursor.as_deref(), Some("cursor-1"));

        let second = store
            .list_children("p", first.next_cursor.as_deref(), 100)
            .await
            .unwrap();
        assert_eq!(second.next_cursor.as_deref(), Some("cursor-2"));

        let third = store
            .list_children("p", second.next_cursor.as_deref(), 100)
            .await
            .unwrap();
        assert!(third.next_cursor.is_none());
        assert_eq!(third.results[0].plain_text(), "c");
        assert_eq!(store.list_calls(), 3);
    }

    #[tokio::test]
    async fn test_appends_are_recorded() {
        let store = MemoryStore::new();
        store
            .append_children("p1", &[ContentBlock::paragraph("new")])
            .await
            .unwrap();

        let appended = store.appended();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].0, "p1");
        assert_eq!(appended[0].1[0].plain_text(), "new");
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = MemoryStore::new();
        store.fail_listing("boom");
        store.fail_append("bust");

        assert!(store.list_children("p", None, 100).await.is_err());
        assert!(store
            .append_children("p", &[ContentBlock::paragraph("x")])
            .await
            .is_err());
        assert!(store.appended().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.list_children("p", None, 100).await.unwrap();
        assert_eq!(handle.list_calls(), 1);
    }
}
