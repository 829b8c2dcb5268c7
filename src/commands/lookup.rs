use crate::dictionary::Dictionary;
use crate::etymology::format_etymology;
use tracing::{info, warn};

pub const NO_DEFINITION: &str = "⚠️ No definition found for this word.";
pub const NO_ETYMOLOGY: &str = "⚠️ No etymology found for this word.";

/// Definition and etymology text for one word, ready to embed in a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    pub definition: String,
    pub etymology: String,
}

/// Runs the definition and etymology lookups for `word`. Never fails: missing
/// or failed lookups are replaced with placeholders.
pub async fn describe_word(dictionary: &dyn Dictionary, word: &str) -> WordReport {
    let mut definition = dictionary.definitions(word).await;
    if definition.is_empty() {
        definition = NO_DEFINITION.to_string();
    }

    let etymology = match dictionary.etymologies(word).await {
        Ok(fragments) if !fragments.is_empty() => fragments
            .iter()
            .map(|fragment| format_etymology(fragment))
            .collect::<Vec<_>>()
            .join("\n"),
        Ok(_) => {
            info!("No etymologies found for '{}'", word);
            NO_ETYMOLOGY.to_string()
        }
        Err(e) => {
            warn!("Etymology lookup for '{}' failed: {}", word, e);
            NO_ETYMOLOGY.to_string()
        }
    };

    WordReport {
        definition,
        etymology,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::FakeDictionary;
    use crate::dictionary::EtymologyLookupError;
    use reqwest::StatusCode;

    #[tokio::test]
    async fn joins_formatted_etymologies() {
        let dictionary = FakeDictionary::default().with_etymologies(Ok(vec![
            "<ety><ets>Latin</ets> lux</ety>".to_string(),
            "<ety>See\n<er>light</er></ety>".to_string(),
        ]));
        let report = describe_word(&dictionary, "lucent").await;
        assert_eq!(report.etymology, "**Latin** lux\nSee *light*");
    }

    #[tokio::test]
    async fn failed_etymology_lookup_uses_placeholder() {
        let dictionary = FakeDictionary::default()
            .with_etymologies(Err(EtymologyLookupError::Status(StatusCode::NOT_FOUND)));
        let report = describe_word(&dictionary, "lucent").await;
        assert_eq!(report.etymology, NO_ETYMOLOGY);
        assert_eq!(report.definition, FakeDictionary::DEFINITION);
    }

    #[tokio::test]
    async fn empty_results_use_placeholders() {
        let dictionary = FakeDictionary::default()
            .with_definition("")
            .with_etymologies(Ok(vec![]));
        let report = describe_word(&dictionary, "zzz").await;
        assert_eq!(report.definition, NO_DEFINITION);
        assert_eq!(report.etymology, NO_ETYMOLOGY);
    }
}
