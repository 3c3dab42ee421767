//! Response bodies for `GET /youtube/v3/channels?part=statistics`.
//!
//! The live API returns counts as decimal strings; `channel_response` does the
//! same so tests exercise the real parsing path.

use serde_json::{json, Value};

/// A well-formed response for a single channel.
///
/// # Arguments
/// - `channel_id` - Channel id echoed back in `items[0].id`
/// - `subscribers` - Value of `statistics.subscriberCount`
/// - `views` - Value of `statistics.viewCount`
pub fn channel_response(channel_id: &str, subscribers: u64, views: u64) -> Value {
    json!({
        "kind": "youtube#channelListResponse",
        "etag": "4Zcrm5Gm2zFQvPhh0Kh6qcRTq1s",
        "pageInfo": { "totalResults": 1, "resultsPerPage": 5 },
        "items": [
            {
                "kind": "youtube#channel",
                "etag": "PkC_9ck7aYuw2nAWC5hd2hzPOXU",
                "id": channel_id,
                "statistics": {
                    "viewCount": views.to_string(),
                    "subscriberCount": subscribers.to_string(),
                    "hiddenSubscriberCount": false,
                    "videoCount": "104"
                }
            }
        ]
    })
}

/// What the API returns for an unknown channel id: no `items` key at all.
pub fn no_items_response() -> Value {
    json!({
        "kind": "youtube#channelListResponse",
        "etag": "RuuXzTIr0OoDqI4S0RU6n4FqKEM",
        "pageInfo": { "totalResults": 0, "resultsPerPage": 5 }
    })
}

/// A response with an explicitly empty `items` list.
pub fn empty_items_response() -> Value {
    json!({
        "kind": "youtube#channelListResponse",
        "items": []
    })
}

/// A channel entry whose `statistics` part was not returned.
pub fn missing_statistics_response(channel_id: &str) -> Value {
    json!({
        "kind": "youtube#channelListResponse",
        "items": [
            { "kind": "youtube#channel", "id": channel_id }
        ]
    })
}

/// Quota or key errors come back as an `error` object instead of `items`.
pub fn error_response() -> Value {
    json!({
        "error": {
            "code": 403,
            "message": "The request cannot be completed because you have exceeded your quota.",
            "errors": [
                { "domain": "youtube.quota", "reason": "quotaExceeded" }
            ]
        }
    })
}
