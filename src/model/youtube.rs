//! Wire types for the YouTube Data API `channels` endpoint.
//!
//! Every field is optional: the validation gates in the metric cache decide
//! what a usable response is, so deserialization only rejects non-objects.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Option<Vec<ChannelItem>>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub statistics: Option<ChannelStatistics>,
}

/// Counts arrive as decimal strings from the live API but are accepted as
/// JSON numbers as well.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default)]
    pub subscriber_count: Option<Value>,
    #[serde(default)]
    pub view_count: Option<Value>,
}
