//! Publishes one channel statistic as the name of a Discord channel.

use std::sync::Arc;

use serenity::all::{ChannelId, GuildId};
use tokio::sync::Mutex;

use crate::{
    data::DiscordGateway,
    error::AppError,
    model::{
        discord::{ResolvedChannel, ResolvedGuild},
        metric::StatDimension,
    },
    service::{metric_cache::MetricCache, stat_format::format_stat},
    util::{lazy::LazyResolver, ready::ReadyGate},
};

/// Result of a publish that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The channel was renamed to the contained name.
    Renamed(String),
    /// This service already applied this name; no request was sent.
    Unchanged(String),
}

/// Renames a status channel to show the current value of one statistic.
///
/// One instance exists per dimension. Both share the metric cache and the
/// guild resolver but resolve their own destination channel.
pub struct ChannelStatusService {
    dimension: StatDimension,
    cache: Arc<MetricCache>,
    gateway: Arc<dyn DiscordGateway>,
    ready: ReadyGate,
    guild: Arc<LazyResolver<GuildId, ResolvedGuild>>,
    channel: LazyResolver<ChannelId, ResolvedChannel>,
    /// Name most recently applied by this service.
    last_published: Mutex<Option<String>>,
}

impl ChannelStatusService {
    /// # Arguments
    /// - `dimension` - Which statistic this service publishes
    /// - `channel_id` - Destination channel, resolved on first publish
    /// - `cache` - Shared metric cache
    /// - `gateway` - Discord lookups and mutations
    /// - `ready` - Gateway readiness, awaited before the first publish
    /// - `guild` - Shared resolver for the community guild
    pub fn new(
        dimension: StatDimension,
        channel_id: ChannelId,
        cache: Arc<MetricCache>,
        gateway: Arc<dyn DiscordGateway>,
        ready: ReadyGate,
        guild: Arc<LazyResolver<GuildId, ResolvedGuild>>,
    ) -> Self {
        Self {
            dimension,
            cache,
            gateway,
            channel: LazyResolver::new("status channel", channel_id, ready.clone()),
            ready,
            guild,
            last_published: Mutex::new(None),
        }
    }

    pub fn dimension(&self) -> StatDimension {
        self.dimension
    }

    /// Reads the current statistic and renames the destination channel.
    ///
    /// The rename is skipped only when this service already applied the same
    /// name. The first publish after start always renames, so a channel renamed
    /// by hand is corrected at the latest on restart.
    ///
    /// # Returns
    /// - `Ok(PublishOutcome::Renamed)` - Channel renamed
    /// - `Ok(PublishOutcome::Unchanged)` - Same name as the last publish, rename skipped
    /// - `Err(AppError::NotFound)` - No snapshot yet, or the guild or channel
    ///   could not be resolved
    /// - `Err(AppError::FormatErr)` - The statistic is zero
    /// - `Err(AppError::DiscordErr)` - The rename request failed
    pub async fn publish(&self) -> Result<PublishOutcome, AppError> {
        self.ready.wait().await;

        tracing::info!("Updating {} statistics...", self.dimension);

        let snapshot = self.cache.get_snapshot().await.ok_or_else(|| {
            AppError::NotFound("No channel statistics have been fetched yet".to_string())
        })?;

        let display = format_stat(self.dimension.pick(&snapshot))?;
        let name = format!("{}{}", self.dimension.label(), display);

        let channel = self.resolve_channel().await?;

        let mut last_published = self.last_published.lock().await;
        if last_published.as_deref() == Some(name.as_str()) {
            tracing::debug!("Channel {} already shows '{}'", channel.channel_id, name);
            return Ok(PublishOutcome::Unchanged(name));
        }

        self.gateway.rename_channel(&channel, &name).await?;
        *last_published = Some(name.clone());

        tracing::info!(
            "Renamed channel {} (resolved as '{}') to '{}'",
            channel.channel_id,
            channel.name,
            name
        );

        Ok(PublishOutcome::Renamed(name))
    }

    async fn resolve_channel(&self) -> Result<ResolvedChannel, AppError> {
        let gateway = &self.gateway;

        let guild = self
            .guild
            .resolve(|id| async move { gateway.find_guild(id).await })
            .await
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", self.guild.id())))?;
        let guild_id = guild.guild_id;

        self.channel
            .resolve(|id| async move { gateway.find_channel(guild_id, id).await })
            .await
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Status channel {} not found in guild {}",
                    self.channel.id(),
                    guild_id
                ))
            })
    }
}
