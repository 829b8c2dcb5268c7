//! Serenity glue: reply handles, channel posting and guild command registration.

use crate::commands::{Command, Interaction, ReplyError, ReplyHandle};
use crate::daily::ChannelSink;
use crate::discord_text::truncate_for_discord;
use async_trait::async_trait;
use serenity::all::{
    ChannelId, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse, GuildId, Http,
    Interaction as GatewayInteraction,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Reply handle for one slash command interaction.
pub struct SerenityReply {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl SerenityReply {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl ReplyHandle for SerenityReply {
    async fn defer(&self) -> Result<(), ReplyError> {
        self.interaction.defer(&self.http).await?;
        Ok(())
    }

    async fn respond(&self, content: &str) -> Result<(), ReplyError> {
        let message = CreateInteractionResponseMessage::new().content(truncate_for_discord(content));
        self.interaction
            .create_response(&self.http, CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }

    async fn edit(&self, content: &str) -> Result<(), ReplyError> {
        self.interaction
            .edit_response(
                &self.http,
                EditInteractionResponse::new().content(truncate_for_discord(content)),
            )
            .await?;
        Ok(())
    }

    async fn follow_up(&self, content: &str) -> Result<(), ReplyError> {
        self.interaction
            .create_followup(
                &self.http,
                CreateInteractionResponseFollowup::new().content(truncate_for_discord(content)),
            )
            .await?;
        Ok(())
    }
}

/// Converts a gateway interaction into a routable [`Interaction`].
/// Anything that is not a slash command invocation yields `None`.
pub fn to_interaction(http: Arc<Http>, interaction: &GatewayInteraction) -> Option<Interaction> {
    let command = interaction.as_command()?.clone();
    let options = command
        .data
        .options
        .iter()
        .filter_map(|option| {
            option
                .value
                .as_str()
                .map(|value| (option.name.clone(), value.to_string()))
        })
        .collect();
    let name = command.data.name.clone();
    Some(Interaction::new(
        name,
        options,
        Box::new(SerenityReply::new(http, command)),
    ))
}

pub fn create_command(command: &Command) -> CreateCommand {
    command.options.iter().fold(
        CreateCommand::new(command.name).description(command.description),
        |builder, option| {
            builder.add_option(
                CreateCommandOption::new(CommandOptionType::String, option.name, option.description)
                    .required(option.required),
            )
        },
    )
}

/// Registers the slash commands for one guild. Failures are logged only.
pub async fn register_commands(http: &Http, guild_id: GuildId, commands: &[Command]) {
    let builders = commands.iter().map(create_command).collect();
    match guild_id.set_commands(http, builders).await {
        Ok(registered) => {
            for command in registered {
                info!("Command {} registered", command.name);
            }
        }
        Err(e) => warn!("Error registering commands in guild {}: {}", guild_id, e),
    }
}

/// Posts plain messages through the bot's REST client.
pub struct HttpChannelSink {
    http: Arc<Http>,
}

impl HttpChannelSink {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChannelSink for HttpChannelSink {
    async fn send(&self, channel: ChannelId, content: &str) -> anyhow::Result<()> {
        channel
            .send_message(
                &self.http,
                CreateMessage::new().content(truncate_for_discord(content)),
            )
            .await?;
        Ok(())
    }
}
