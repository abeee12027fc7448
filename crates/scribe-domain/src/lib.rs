//! Scribe Domain Layer
//!
//! Core types and trait seams for the document-store / generator bridge.
//! This crate defines the vocabulary every other layer speaks: content
//! blocks as read from and written to the document store, the closed set
//! of generation actions, the validated process request, and the trait
//! interfaces behind which the external collaborators live.
//!
//! ## Key Concepts
//!
//! - **ContentBlock**: one node of a page's block tree (paragraph, heading, ...)
//! - **BlockPage**: one page of a paginated child listing, ended by a null cursor
//! - **ActionKind**: the closed enumeration of supported transformations
//! - **DocumentStore / TextGenerator**: async seams implemented by the
//!   infrastructure crates and by the test doubles
//!
//! ## Architecture
//!
//! Infrastructure implementations (HTTP clients, mocks) live in
//! `scribe-store` and `scribe-llm`; orchestration lives in `scribe-pipeline`.
//! This crate carries no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod block;
pub mod request;
pub mod traits;

// Re-exports for convenience
pub use action::{ActionKind, UnknownAction};
pub use block::{BlockPage, BlockType, ContentBlock, RichText};
pub use request::{ProcessOutcome, ProcessRequest};
pub use traits::{DocumentStore, TextGenerator};
