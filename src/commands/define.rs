use super::lookup::{describe_word, WordReport};
use super::{CommandHandler, Interaction, Services};
use async_trait::async_trait;
use tracing::{error, info};

pub const WORD_OPTION: &str = "word";
pub const USAGE: &str = "⚠️ Please provide a word to define.";

pub struct DefineHandler {
    services: Services,
}

impl DefineHandler {
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

pub fn define_message(word: &str, report: &WordReport) -> String {
    format!(
        "📖 **Definition of {}**:\n{}\n\n📝 **Etymology**:\n{}",
        word, report.definition, report.etymology
    )
}

#[async_trait]
impl CommandHandler for DefineHandler {
    async fn handle(&self, interaction: Interaction) {
        info!("Received /define command");

        let Some(word) = interaction.argument(WORD_OPTION).map(str::to_string) else {
            if let Err(e) = interaction.reply.respond(USAGE).await {
                error!("Failed to send /define usage warning: {}", e);
            }
            return;
        };

        info!("Fetching definition for: {}", word);
        let report = describe_word(self.services.dictionary.as_ref(), &word).await;

        if let Err(e) = interaction.reply.respond(&define_message(&word, &report)).await {
            error!("Failed to send /define response: {}", e);
        }
    }
}
