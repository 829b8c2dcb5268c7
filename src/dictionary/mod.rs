//! Wordnik dictionary lookups.
//!
//! Word-of-the-day and definition lookups never fail: every problem is turned
//! into a placeholder string meant for the end user. Etymology lookups return a
//! typed error instead, and callers pick their own fallback.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub mod client;
pub mod models;
pub mod render;

pub use client::WordnikClient;
pub use models::{Definition, ExampleUse, WordOfTheDay};

pub const WOTD_FETCH_FAILED: &str = "⚠️ Could not fetch the word of the day. Please try again later.";
pub const WOTD_READ_FAILED: &str = "⚠️ Could not read response from Wordnik API.";
pub const WOTD_PARSE_FAILED: &str = "⚠️ Could not parse the Wordnik API response.";
pub const WOTD_NOT_FOUND: &str = "⚠️ No word of the day found.";
pub const WOTD_NO_DEFINITION: &str = "⚠️ No definition found.";
pub const WOTD_NO_EXAMPLE: &str = "⚠️ No example found.";

pub const DEFINITION_FETCH_FAILED: &str = "⚠️ Error fetching word definition.";
pub const DEFINITION_NOT_FOUND: &str = "⚠️ No definition found.";
pub const DEFINITION_READ_FAILED: &str = "⚠️ Error reading response.";
pub const DEFINITION_PARSE_FAILED: &str = "⚠️ Error parsing response.";

#[derive(Debug, Error)]
pub enum EtymologyLookupError {
    #[error("error fetching etymologies: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("no etymologies found (status {0})")]
    Status(StatusCode),
    #[error("error reading response: {0}")]
    Read(#[source] reqwest::Error),
    #[error("error parsing response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Display text for today's word, or a placeholder.
    async fn word_of_the_day(&self) -> String;

    /// Numbered definitions of `word`, or a placeholder.
    async fn definitions(&self, word: &str) -> String;

    /// Raw `<ety>` fragments for `word`, in the order Wordnik returns them.
    async fn etymologies(&self, word: &str) -> Result<Vec<String>, EtymologyLookupError>;
}
