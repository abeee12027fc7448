//! Scribe Content Pipeline
//!
//! Turns "page + action" requests into generated text and writes the
//! result back into the source page.
//!
//! # Architecture
//!
//! ```text
//! Request → resolve content (extract if needed) → build prompt
//!         → generate → append → Outcome
//! ```
//!
//! Extraction pages through the store's child listing and flattens
//! recognized block types into plain text; the writer degrades the
//! generated text into a single paragraph block for the append. Each
//! request runs the stages strictly in sequence and fails terminally at
//! the first error, classified by stage.
//!
//! # Example Usage
//!
//! ```no_run
//! use scribe_pipeline::{ContentPipeline, PipelineConfig};
//! use scribe_domain::{ActionKind, ProcessRequest};
//! use scribe_store::MemoryStore;
//! use scribe_llm::MockGenerator;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let generator = Arc::new(MockGenerator::new("Summary."));
//! let pipeline = ContentPipeline::new(store, generator, PipelineConfig::default());
//!
//! let request = ProcessRequest::new(ActionKind::Summarize, "page-1")
//!     .with_content("Meeting notes to summarize");
//! let outcome = pipeline.process(request).await?;
//!
//! println!("output: {}", outcome.output);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod pipeline;
mod prompt;
mod writer;

pub use config::PipelineConfig;
pub use error::{PipelineError, Stage};
pub use extract::{BlockTextExtractor, ChildPager};
pub use pipeline::ContentPipeline;
pub use prompt::PromptBuilder;
pub use writer::DocumentWriter;
