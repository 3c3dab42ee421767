//! Access to the external systems the bot depends on.
//!
//! Each system sits behind a trait so the services can be exercised against
//! in-memory fakes:
//!
//! - `youtube` - `MetricProvider`, the channel statistics endpoint
//! - `discord` - `DiscordGateway`, handle lookups and the two mutations the bot performs

pub mod discord;
pub mod youtube;

pub use discord::{DiscordGateway, SerenityGateway};
pub use youtube::{MetricProvider, YoutubeClient};
