//! Time-bucketed cache over the channel statistics provider.
//!
//! Wall-clock time is split into 100 second buckets. Within the bucket of the
//! last successful fetch every read is served from memory; the first read in a
//! later bucket fetches again. A fetch that fails any validation gate keeps the
//! previous snapshot and leaves the bucket where it was, so the next read
//! retries straight away instead of waiting for the next bucket.
//!
//! The state lock is never held across the fetch. Two readers that both see a
//! stale bucket each fetch; whichever finishes last replaces the snapshot. The
//! snapshot is swapped as a whole value so a reader never observes a mix of
//! two fetches.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::{
    data::MetricProvider,
    error::metric::MetricError,
    model::{metric::MetricSnapshot, youtube::ChannelListResponse},
    util::clock::Clock,
};

/// Width of a cache bucket in seconds.
pub const BUCKET_SECONDS: i64 = 100;

pub fn bucket_of(now_seconds: i64) -> i64 {
    now_seconds.div_euclid(BUCKET_SECONDS)
}

pub struct MetricCache {
    provider: Arc<dyn MetricProvider>,
    clock: Arc<dyn Clock>,
    channel_id: String,
    /// Last known-good snapshot. Its `bucket` is the last successful bucket.
    snapshot: RwLock<Option<MetricSnapshot>>,
}

impl MetricCache {
    /// # Arguments
    /// - `provider` - Source of raw statistics responses
    /// - `clock` - Wall clock used for bucketing
    /// - `channel_id` - Provider channel id; responses for any other id are rejected
    pub fn new(
        provider: Arc<dyn MetricProvider>,
        clock: Arc<dyn Clock>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            clock,
            channel_id: channel_id.into(),
            snapshot: RwLock::new(None),
        }
    }

    /// Returns the best snapshot available, fetching if the bucket has moved.
    ///
    /// Never fails. `None` only until the first successful fetch.
    pub async fn get_snapshot(&self) -> Option<MetricSnapshot> {
        let current_bucket = bucket_of(self.clock.now_seconds());

        let previous = *self.snapshot.read().await;
        if let Some(snapshot) = previous {
            if snapshot.bucket == current_bucket {
                tracing::debug!("Serving channel stats from bucket {}", current_bucket);
                return Some(snapshot);
            }
        }

        tracing::info!("Retrieving channel stats...");

        let fetched = match self.provider.fetch_statistics(&self.channel_id).await {
            Ok(body) => validate_response(&body, &self.channel_id),
            Err(e) => Err(e),
        };

        match fetched {
            Ok((subscriber_count, view_count)) => {
                let snapshot = MetricSnapshot {
                    subscriber_count,
                    view_count,
                    bucket: current_bucket,
                };
                *self.snapshot.write().await = Some(snapshot);
                tracing::info!(
                    "Youtube statistics fetched: {} subscribers, {} views",
                    subscriber_count,
                    view_count
                );
                Some(snapshot)
            }
            Err(e) => {
                tracing::warn!("Keeping previous channel stats: {}", e);
                // Re-read rather than returning `previous`: a concurrent fetch
                // may have succeeded while this one was in flight.
                *self.snapshot.read().await
            }
        }
    }

    /// The cached snapshot, without any fetch.
    #[cfg(test)]
    pub async fn peek(&self) -> Option<MetricSnapshot> {
        *self.snapshot.read().await
    }
}

/// Runs a provider response through the validation gates in order.
///
/// # Returns
/// - `Ok((subscribers, views))` - Both counts present and non-zero
/// - `Err(MetricError::MalformedResponse)` - Empty body, no `items`, or no `statistics`
/// - `Err(MetricError::IdentityMismatch)` - `items[0].id` is not `channel_id`
/// - `Err(MetricError::DegenerateValue)` - A count is missing, unparsable or zero
pub fn validate_response(body: &Value, channel_id: &str) -> Result<(u64, u64), MetricError> {
    let is_empty = match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(MetricError::MalformedResponse("empty response".to_string()));
    }

    let response: ChannelListResponse = serde_json::from_value(body.clone())
        .map_err(|e| MetricError::MalformedResponse(e.to_string()))?;

    let channel = response
        .items
        .and_then(|items| items.into_iter().next())
        .ok_or_else(|| MetricError::MalformedResponse("no items in response".to_string()))?;

    let actual = channel.id.unwrap_or_default();
    if actual != channel_id {
        return Err(MetricError::IdentityMismatch {
            expected: channel_id.to_string(),
            actual,
        });
    }

    let statistics = channel
        .statistics
        .ok_or_else(|| MetricError::MalformedResponse("no statistics in response".to_string()))?;

    let subscribers = parse_count("subscriberCount", statistics.subscriber_count.as_ref())?;
    let views = parse_count("viewCount", statistics.view_count.as_ref())?;

    Ok((subscribers, views))
}

/// Accepts a decimal string or a JSON number and requires a positive result.
fn parse_count(field: &'static str, value: Option<&Value>) -> Result<u64, MetricError> {
    let degenerate = |raw: String| MetricError::DegenerateValue { field, value: raw };

    let parsed = match value {
        Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
        Some(Value::Number(number)) => number.as_f64(),
        _ => None,
    };

    match parsed {
        Some(count) if count.is_finite() && count >= 1.0 => Ok(count as u64),
        _ => Err(degenerate(
            value.map_or_else(|| "missing".to_string(), Value::to_string),
        )),
    }
}
