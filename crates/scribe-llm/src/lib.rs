//! Scribe Generator Layer
//!
//! Implementations of the `TextGenerator` trait from `scribe-domain`.
//!
//! # Implementations
//!
//! - `MockGenerator`: deterministic mock for testing
//! - `OpenAiGenerator`: client for an OpenAI-compatible chat-completions API
//!
//! # Examples
//!
//! ```
//! use scribe_llm::MockGenerator;
//! use scribe_domain::TextGenerator;
//!
//! # async fn example() {
//! let generator = MockGenerator::new("Hello from the model!");
//! let result = generator.generate("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from the model!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use scribe_domain::TextGenerator;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiGenerator;

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the generator
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The generator returned a response with no text
    #[error("Empty completion")]
    EmptyCompletion,

    /// Generic error (used by test doubles)
    #[error("Generator error: {0}")]
    Other(String),
}

/// Mock generator for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Clones share call-count and response state.
///
/// # Examples
///
/// ```
/// use scribe_llm::MockGenerator;
/// use scribe_domain::TextGenerator;
///
/// # async fn example() {
/// let mut generator = MockGenerator::new("default");
/// generator.add_response("prompt1", "response1");
/// assert_eq!(generator.generate("prompt1").await.unwrap(), "response1");
/// assert_eq!(generator.generate("anything").await.unwrap(), "default");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockGenerator {
    /// Create a new MockGenerator with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Make every generate call fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    type Error = GeneratorError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(GeneratorError::Other(message));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
