//! Business logic of the bot.
//!
//! - `metric_cache` - bucketed, degradation-tolerant cache of channel statistics
//! - `stat_format` - display strings for statistics
//! - `channel_status` - publishes a statistic as a channel name
//! - `role_sync` - grants the derived role when the trigger role is added

pub mod channel_status;
pub mod metric_cache;
pub mod role_sync;
pub mod stat_format;

#[cfg(test)]
mod test;
