//! Slash command table and the router that dispatches interactions to handlers.

use crate::dictionary::Dictionary;
use crate::llm::WordFinder;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

pub mod define;
pub mod find_word_for;
pub mod interaction;
pub mod lookup;
pub mod word_of_the_day;

#[cfg(test)]
pub(crate) mod testing;

pub use interaction::{Interaction, ReplyError, ReplyHandle};

pub const WORD_OF_THE_DAY: &str = "word-of-the-day";
pub const DEFINE: &str = "define";
pub const FIND_WORD_FOR: &str = "find-word-for";

/// A required string argument of a slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOption {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [CommandOption],
}

/// Registered with the guild at startup.
pub static COMMANDS: [Command; 3] = [
    Command {
        name: WORD_OF_THE_DAY,
        description: "Get the word of the day from Wordnik.",
        options: &[],
    },
    Command {
        name: DEFINE,
        description: "Look up the definition and etymology of a word.",
        options: &[CommandOption {
            name: define::WORD_OPTION,
            description: "The word to define",
            required: true,
        }],
    },
    Command {
        name: FIND_WORD_FOR,
        description: "Find the best single word for a sentence.",
        options: &[CommandOption {
            name: find_word_for::SENTENCE_OPTION,
            description: "The sentence to find a word for",
            required: true,
        }],
    },
];

/// Remote services shared by every handler.
#[derive(Clone)]
pub struct Services {
    pub dictionary: Arc<dyn Dictionary>,
    pub finder: Arc<dyn WordFinder>,
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Takes ownership of the interaction. Failures are logged, never returned.
    async fn handle(&self, interaction: Interaction);
}

pub struct CommandRouter {
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
}

impl CommandRouter {
    pub fn new(services: Services) -> Self {
        let mut handlers: HashMap<&'static str, Arc<dyn CommandHandler>> = HashMap::new();
        handlers.insert(
            WORD_OF_THE_DAY,
            Arc::new(word_of_the_day::WordOfTheDayHandler::new(services.clone())),
        );
        handlers.insert(DEFINE, Arc::new(define::DefineHandler::new(services.clone())));
        handlers.insert(
            FIND_WORD_FOR,
            Arc::new(find_word_for::FindWordForHandler::new(services)),
        );
        Self { handlers }
    }

    pub fn commands(&self) -> &'static [Command] {
        &COMMANDS
    }

    pub async fn dispatch(&self, interaction: Interaction) {
        info!("Received command: {}", interaction.command);
        match self.handlers.get(interaction.command.as_str()) {
            Some(handler) => handler.handle(interaction).await,
            None => warn!("Unknown command: {}", interaction.command),
        }
    }
}
