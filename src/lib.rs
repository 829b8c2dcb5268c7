pub mod bot;
pub mod commands;
pub mod config;
pub mod daily;
pub mod dictionary;
pub mod discord_text;
pub mod etymology;
pub mod llm;

/// Custom data shared with the gateway event handler
pub struct Data {
    pub config: config::Config,
    pub router: std::sync::Arc<commands::CommandRouter>,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
