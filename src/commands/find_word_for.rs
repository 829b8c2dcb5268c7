use super::lookup::{describe_word, WordReport};
use super::{CommandHandler, Interaction, ReplyHandle, Services};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub const SENTENCE_OPTION: &str = "sentence";
pub const USAGE: &str = "⚠️ Please provide a sentence to find a word for.";

pub struct FindWordForHandler {
    services: Services,
}

impl FindWordForHandler {
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

pub fn not_found_message(sentence: &str) -> String {
    format!(
        "⚠️ Could not find a suitable word for the given sentence:\n{}",
        sentence
    )
}

pub fn found_message(word: &str, report: &WordReport) -> String {
    format!(
        "✅ **Best word for your sentence:** **{}**\n\n📖 **Definition:**\n{}\n\n📝 **Etymology:**\n{}",
        word, report.definition, report.etymology
    )
}

#[async_trait]
impl CommandHandler for FindWordForHandler {
    /// Acknowledges and returns; the lookups run on a spawned task that owns
    /// the reply handle from then on.
    async fn handle(&self, interaction: Interaction) {
        info!("Received /find-word-for command");

        let Some(sentence) = interaction.argument(SENTENCE_OPTION).map(str::to_string) else {
            if let Err(e) = interaction.reply.respond(USAGE).await {
                error!("Failed to send /find-word-for usage warning: {}", e);
            }
            return;
        };

        info!("Fetching word for sentence: {}", sentence);

        if let Err(e) = interaction.reply.defer().await {
            error!("Failed to acknowledge /find-word-for: {}", e);
            return;
        }

        let services = self.services.clone();
        let reply = interaction.reply;
        tokio::spawn(async move {
            find_and_reply(services, reply, sentence).await;
        });
    }
}

async fn find_and_reply(services: Services, reply: Box<dyn ReplyHandle>, sentence: String) {
    let content = match services.finder.find_word_for(&sentence).await {
        Ok(word) => {
            let report = describe_word(services.dictionary.as_ref(), &word.to_lowercase()).await;
            found_message(&word, &report)
        }
        Err(e) => {
            warn!("Error finding word for '{}': {}", sentence, e);
            not_found_message(&sentence)
        }
    };

    if let Err(e) = reply.edit(&content).await {
        error!("Failed to edit /find-word-for response: {}", e);
    }
}
