use super::{CommandHandler, Interaction, Services};
use crate::dictionary::WOTD_FETCH_FAILED;
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct WordOfTheDayHandler {
    services: Services,
}

impl WordOfTheDayHandler {
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

#[async_trait]
impl CommandHandler for WordOfTheDayHandler {
    async fn handle(&self, interaction: Interaction) {
        info!("Received /word-of-the-day command");

        if let Err(e) = interaction.reply.defer().await {
            error!("Failed to acknowledge /word-of-the-day: {}", e);
            return;
        }

        let mut todays_word = self.services.dictionary.word_of_the_day().await;
        if todays_word.is_empty() {
            warn!("Wordnik returned an empty word of the day");
            todays_word = WOTD_FETCH_FAILED.to_string();
        }

        match interaction.reply.edit(&todays_word).await {
            Ok(()) => info!("Word of the day response sent"),
            Err(e) => {
                warn!("Failed to edit word of the day response: {}", e);
                let fallback = format!("📖 Here's your word of the day:\n{}", todays_word);
                if let Err(e) = interaction.reply.follow_up(&fallback).await {
                    error!("Failed to send word of the day follow-up: {}", e);
                }
            }
        }
    }
}
