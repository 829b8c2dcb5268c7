use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("discord rejected the reply: {0}")]
    Platform(#[from] serenity::Error),
    #[error("reply failed: {0}")]
    Other(String),
}

/// The platform side of one interaction. A deferred acknowledgment must be
/// followed by `edit`, a plain `respond` is final.
#[async_trait]
pub trait ReplyHandle: Send + Sync {
    /// Acknowledge now and reply later through [`ReplyHandle::edit`].
    async fn defer(&self) -> Result<(), ReplyError>;
    async fn respond(&self, content: &str) -> Result<(), ReplyError>;
    /// Replace the deferred placeholder.
    async fn edit(&self, content: &str) -> Result<(), ReplyError>;
    /// Post an additional message after the initial response.
    async fn follow_up(&self, content: &str) -> Result<(), ReplyError>;
}

/// One invocation of a slash command.
pub struct Interaction {
    pub command: String,
    pub options: Vec<(String, String)>,
    pub reply: Box<dyn ReplyHandle>,
}

impl Interaction {
    pub fn new(
        command: impl Into<String>,
        options: Vec<(String, String)>,
        reply: Box<dyn ReplyHandle>,
    ) -> Self {
        Self {
            command: command.into(),
            options,
            reply,
        }
    }

    /// Value of the named argument, `None` when absent or blank.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }
}
