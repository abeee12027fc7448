//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates (`scribe-store`,
//! `scribe-llm`); the pipeline is generic over both so tests substitute
//! in-memory doubles.

use crate::block::{BlockPage, ContentBlock};
use async_trait::async_trait;

/// Trait for reading from and appending to the document store
///
/// Implemented by the infrastructure layer (scribe-store).
#[async_trait]
pub trait DocumentStore {
    /// Error type for store operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// List one page of a block's direct children
    ///
    /// `cursor` is `None` on the first call; the returned page's
    /// `next_cursor` continues the sequence until it is `None`.
    async fn list_children(
        &self,
        block_id: &str,
        cursor: Option<&str>,
        page_size: u32,
    ) -> Result<BlockPage, Self::Error>;

    /// Append blocks as new direct children of a block
    async fn append_children(
        &self,
        block_id: &str,
        blocks: &[ContentBlock],
    ) -> Result<(), Self::Error>;
}

/// Trait for the generative-text collaborator
///
/// Implemented by the infrastructure layer (scribe-llm).
#[async_trait]
pub trait TextGenerator {
    /// Error type for generation operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate text for a fully-formed prompt
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
