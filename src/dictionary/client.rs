use super::models::{Definition, WordOfTheDay};
use super::render::{render_definitions, render_word_of_the_day};
use super::{
    Dictionary, EtymologyLookupError, DEFINITION_FETCH_FAILED, DEFINITION_NOT_FOUND,
    DEFINITION_PARSE_FAILED, DEFINITION_READ_FAILED, WOTD_FETCH_FAILED, WOTD_PARSE_FAILED,
    WOTD_READ_FAILED,
};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, info, warn};

/// Wordnik REST client (`https://api.wordnik.com/v4`).
pub struct WordnikClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    definition_limit: usize,
}

impl WordnikClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(
            builder.build()?,
            &config.wordnik_url,
            &config.wordnik_token,
            config.definition_limit,
        )
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        api_key: &str,
        definition_limit: usize,
    ) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid Wordnik URL '{}': {}", base_url, e))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Wordnik URL '{}' cannot be used as a base", base_url);
        }
        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
            definition_limit,
        })
    }

    /// Appends path segments (percent-encoded) and query pairs, then the API key.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("api_key", &self.api_key);
        }
        url
    }
}

#[async_trait]
impl Dictionary for WordnikClient {
    async fn word_of_the_day(&self) -> String {
        let url = self.endpoint(&["words.json", "wordOfTheDay"], &[]);

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error making word of the day request: {}", e.without_url());
                return WOTD_FETCH_FAILED.to_string();
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error reading word of the day response: {}", e.without_url());
                return WOTD_READ_FAILED.to_string();
            }
        };

        debug!("Raw word of the day response: {}", body);

        let wotd: WordOfTheDay = match serde_json::from_str(&body) {
            Ok(wotd) => wotd,
            Err(e) => {
                warn!("Error parsing word of the day response: {}", e);
                return WOTD_PARSE_FAILED.to_string();
            }
        };

        if wotd.word.is_empty() {
            info!("No word found in word of the day response");
        }
        render_word_of_the_day(&wotd)
    }

    async fn definitions(&self, word: &str) -> String {
        let limit = self.definition_limit.to_string();
        let url = self.endpoint(
            &["word.json", word, "definitions"],
            &[("limit", limit.as_str())],
        );

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error requesting definitions for '{}': {}", word, e.without_url());
                return DEFINITION_FETCH_FAILED.to_string();
            }
        };

        if response.status() != StatusCode::OK {
            warn!(
                "Wordnik returned status {} for definitions of '{}'",
                response.status(),
                word
            );
            return DEFINITION_NOT_FOUND.to_string();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error reading definitions for '{}': {}", word, e.without_url());
                return DEFINITION_READ_FAILED.to_string();
            }
        };

        let definitions: Vec<Definition> = match serde_json::from_str(&body) {
            Ok(definitions) => definitions,
            Err(e) => {
                warn!("Error parsing definitions for '{}': {}", word, e);
                return DEFINITION_PARSE_FAILED.to_string();
            }
        };

        if definitions.is_empty() {
            info!("No definitions found for '{}'", word);
        }
        render_definitions(word, &definitions, self.definition_limit)
    }

    async fn etymologies(&self, word: &str) -> Result<Vec<String>, EtymologyLookupError> {
        let url = self.endpoint(
            &["word.json", word, "etymologies"],
            &[("useCanonical", "false")],
        );

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| EtymologyLookupError::Transport(e.without_url()))?;

        if response.status() != StatusCode::OK {
            return Err(EtymologyLookupError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| EtymologyLookupError::Read(e.without_url()))?;

        Ok(serde_json::from_str(&body)?)
    }
}
