use anglolex::bot::{register_commands, to_interaction, HttpChannelSink};
use anglolex::commands::{CommandRouter, Services};
use anglolex::daily::DailyPoster;
use anglolex::dictionary::{Dictionary, WordnikClient};
use anglolex::llm::LlmClient;
use anglolex::{config::Config, Data, Error};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Validate the whole environment before building anything
    let config = Config::from_env()?;
    let discord_token = config.discord_token.clone();

    let dictionary: Arc<dyn Dictionary> = Arc::new(WordnikClient::new(&config)?);
    let router = Arc::new(CommandRouter::new(Services {
        dictionary: dictionary.clone(),
        finder: Arc::new(LlmClient::new(&config)),
    }));

    let framework = poise::Framework::<Data, Error>::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, _framework, data| {
                Box::pin(async move {
                    if let serenity::FullEvent::InteractionCreate { interaction } = event {
                        match to_interaction(ctx.http.clone(), interaction) {
                            Some(interaction) => data.router.dispatch(interaction).await,
                            None => info!("Skipping non-command interaction"),
                        }
                    }
                    Ok(())
                })
            },
            ..Default::default()
        })
        .setup(|ctx, ready, _framework| {
            Box::pin(async move {
                info!("Bot is now running as {}", ready.user.name);

                let guild_id = serenity::GuildId::new(config.guild_id);
                register_commands(&ctx.http, guild_id, router.commands()).await;

                let poster = DailyPoster::new(
                    dictionary,
                    Arc::new(HttpChannelSink::new(ctx.http.clone())),
                    Some(serenity::ChannelId::new(config.channel_id)),
                    config.daily_post_time,
                );
                tokio::spawn(poster.run());

                Ok(Data { config, router })
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS;

    let mut client = serenity::ClientBuilder::new(&discord_token, intents)
        .framework(framework)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create client: {}", e))?;

    info!("Starting bot...");
    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
        return Err(anyhow::anyhow!("Discord session failed: {}", why));
    }

    Ok(())
}
