use serde_json::Value;
use serenity::async_trait;

use crate::{config::YoutubeConfig, error::metric::MetricError};

/// A source of raw channel statistics responses.
///
/// Implementations only perform the request. Interpreting the body is the
/// metric cache's job, so a provider returns whatever JSON it received.
#[async_trait]
pub trait MetricProvider: Send + Sync {
    async fn fetch_statistics(&self, channel_id: &str) -> Result<Value, MetricError>;
}

/// Client for the YouTube Data API v3 `channels` endpoint.
pub struct YoutubeClient {
    http_client: reqwest::Client,
    config: YoutubeConfig,
}

impl YoutubeClient {
    /// # Arguments
    /// - `http_client` - Shared client; its timeout bounds every fetch
    /// - `config` - Endpoint and credential
    pub fn new(http_client: reqwest::Client, config: YoutubeConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

#[async_trait]
impl MetricProvider for YoutubeClient {
    /// Issues `GET <endpoint>?part=statistics&id=<channel_id>&key=<api_key>`.
    ///
    /// # Returns
    /// - `Ok(Value)` - The decoded JSON body, which may still be unusable
    /// - `Err(MetricError::Transport)` - Connection failure, timeout, non-2xx
    ///   status or a body that is not JSON
    async fn fetch_statistics(&self, channel_id: &str) -> Result<Value, MetricError> {
        let body = self
            .http_client
            .get(self.config.api_url.clone())
            .query(&[
                ("part", "statistics"),
                ("id", channel_id),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(body)
    }
}
