//! Shared components built once at startup.
//!
//! `AppState` owns what the scheduled jobs and the event handler have in
//! common: the readiness gate, the Discord gateway, the metric cache and the
//! resolver for the community guild. The per-task services are derived from
//! it according to the configuration.

use std::{sync::Arc, time::Duration};

use serenity::all::{Cache, GuildId};
use serenity::http::Http;

use crate::{
    config::Config,
    data::{DiscordGateway, SerenityGateway, YoutubeClient},
    model::{discord::ResolvedGuild, metric::StatDimension},
    service::{
        channel_status::ChannelStatusService, metric_cache::MetricCache, role_sync::RoleSyncEngine,
    },
    util::{clock::SystemClock, lazy::LazyResolver, ready::ReadyGate},
};

pub struct AppState {
    pub ready: ReadyGate,
    pub gateway: Arc<dyn DiscordGateway>,
    pub metric_cache: Arc<MetricCache>,
    /// Shared by every service so the guild is looked up once.
    pub guild: Arc<LazyResolver<GuildId, ResolvedGuild>>,
}

impl AppState {
    /// # Arguments
    /// - `config` - Application configuration
    /// - `http_client` - Client for metric provider requests
    /// - `ready` - Gate the event handler opens on `ready`
    /// - `cache` - Serenity cache of the bot client
    /// - `http` - Serenity HTTP client of the bot client
    pub fn new(
        config: &Config,
        http_client: reqwest::Client,
        ready: ReadyGate,
        cache: Arc<Cache>,
        http: Arc<Http>,
    ) -> Self {
        let provider = Arc::new(YoutubeClient::new(http_client, config.youtube.clone()));
        let metric_cache = Arc::new(MetricCache::new(
            provider,
            Arc::new(SystemClock),
            config.youtube.channel_id.clone(),
        ));

        Self {
            gateway: Arc::new(SerenityGateway::new(cache, http)),
            guild: Arc::new(LazyResolver::new("guild", config.guild_id, ready.clone())),
            metric_cache,
            ready,
        }
    }

    /// One publish service per configured destination channel, paired with its
    /// interval.
    pub fn channel_status_tasks(
        &self,
        config: &Config,
    ) -> Vec<(Arc<ChannelStatusService>, Duration)> {
        [
            (StatDimension::Subscribers, config.sub_count),
            (StatDimension::Views, config.view_count),
        ]
        .into_iter()
        .filter_map(|(dimension, target)| {
            let Some(target) = target else {
                tracing::info!("No channel configured for {} statistics", dimension);
                return None;
            };

            let service = ChannelStatusService::new(
                dimension,
                target.channel_id,
                self.metric_cache.clone(),
                self.gateway.clone(),
                self.ready.clone(),
                self.guild.clone(),
            );

            Some((Arc::new(service), target.interval))
        })
        .collect()
    }

    /// The role sync engine, if a role grant rule is configured.
    pub fn role_sync_engine(&self, config: &Config) -> Option<RoleSyncEngine> {
        let Some(rule) = config.role_grant else {
            tracing::info!("Role sync disabled");
            return None;
        };

        Some(RoleSyncEngine::new(
            rule,
            self.gateway.clone(),
            self.ready.clone(),
            self.guild.clone(),
        ))
    }

    /// Populates the metric cache before the first publish.
    ///
    /// A failed warm-up only means the first publish fetches instead.
    pub async fn warm_up(&self) {
        if self.metric_cache.get_snapshot().await.is_none() {
            tracing::warn!("Channel statistics unavailable at startup");
        }
    }
}
