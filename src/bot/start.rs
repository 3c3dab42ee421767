use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting it.
///
/// The client's cache and HTTP handles are available immediately, so the
/// caller can build the gateway and scheduler before calling `start`.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `handler` - Event handler receiving `ready` and member updates
///
/// # Returns
/// - `Ok(Client)` - Configured client, not yet connected
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, handler: Handler) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects the client and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
