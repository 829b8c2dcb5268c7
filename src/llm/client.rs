use super::{CompletionError, WordFinder};
use crate::config::Config;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use tracing::debug;

/// Fixed seed and low temperature so retries tend to give the same word.
const SEED: i64 = 1;
const TEMPERATURE: f32 = 0.3;

pub struct LlmClient {
    chat_client: Client<OpenAIConfig>,
    chat_model: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        let chat_config = OpenAIConfig::new()
            .with_api_base(&config.openai_url)
            .with_api_key(&config.openai_token);

        Self {
            chat_client: Client::with_config(chat_config),
            chat_model: config.openai_model.clone(),
        }
    }
}

pub fn find_word_prompt(sentence: &str) -> String {
    format!(
        "Provide a single word that best describes the given prompt: {}\n\n# Output Format\n- The response should be a single descriptive word related to the prompt.",
        sentence
    )
}

#[async_trait]
impl WordFinder for LlmClient {
    async fn find_word_for(&self, sentence: &str) -> Result<String, CompletionError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(find_word_prompt(sentence))
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.chat_model)
            .messages(messages)
            .seed(SEED)
            .temperature(TEMPERATURE)
            .build()?;

        let response = self.chat_client.chat().create(request).await?;
        debug!("Completion used model {}", response.model);

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(CompletionError::EmptyResponse)
    }
}
