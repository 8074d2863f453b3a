use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::handler::{BotSettings, Handler},
    config::Config,
    error::AppError,
    service::catalog::PetCatalog,
};

/// Builds the Discord bot client without connecting to the gateway
///
/// The client's HTTP handle can be cloned before [`start_bot`] so other services
/// can send messages as the bot.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and channel settings
/// - `catalog` - Shared pet catalog the bot reads and updates
///
/// # Returns
/// - `Ok(Client)` ready to be started
/// - `Err(AppError)` if the client cannot be built
pub async fn init_bot(config: &Config, catalog: PetCatalog) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(catalog, BotSettings::from_config(config));

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This should be called from within a tokio::spawn task since it will block until
/// the bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
