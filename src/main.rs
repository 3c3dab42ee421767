mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::{sync::Arc, time::Instant};

use crate::{
    bot::handler::{member::RoleSync, Handler},
    config::Config,
    error::AppError,
    state::AppState,
    util::ready::ReadyGate,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let started = Instant::now();

    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let http_client = startup::setup_reqwest_client(&config)?;

    tracing::info!("Starting mCoding bot");

    let ready = ReadyGate::new();
    let handler = Handler::new(ready.clone(), config.guild_id, started);
    let client = bot::start::init_bot(&config, handler).await?;

    let state = AppState::new(
        &config,
        http_client,
        ready,
        client.cache.clone(),
        client.http.clone(),
    );

    if let Some(engine) = state.role_sync_engine(&config) {
        client
            .data
            .write()
            .await
            .insert::<RoleSync>(Arc::new(engine));
    }

    state.warm_up().await;

    let mut scheduler =
        scheduler::channel_status::start_scheduler(state.channel_status_tasks(&config)).await?;

    let shard_manager = client.shard_manager.clone();

    tokio::select! {
        result = bot::start::start_bot(client) => {
            if let Err(e) = result {
                tracing::error!("Discord bot error: {}", e);
            }
        }
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
                Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
            }
        }
    }

    scheduler.shutdown().await?;
    shard_manager.shutdown_all().await;

    tracing::info!("Shutdown complete");

    Ok(())
}
