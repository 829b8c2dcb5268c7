pub mod client;

pub use client::LlmClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Api(#[from] async_openai::error::OpenAIError),
    #[error("completion returned no choices")]
    EmptyResponse,
}

/// Picks one word that best describes a sentence.
#[async_trait]
pub trait WordFinder: Send + Sync {
    /// Returns the model's answer verbatim; it is not trimmed or checked to be
    /// a single token.
    async fn find_word_for(&self, sentence: &str) -> Result<String, CompletionError>;
}
