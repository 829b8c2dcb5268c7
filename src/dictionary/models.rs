use serde::{Deserialize, Deserializer};

/// `GET /words.json/wordOfTheDay`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordOfTheDay {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: Vec<WotdDefinition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub examples: Vec<WotdExample>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WotdDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WotdExample {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// One entry of `GET /word.json/{word}/definitions`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub example_uses: Vec<ExampleUse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExampleUse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

// Wordnik sends `null` for absent fields as often as it omits them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
