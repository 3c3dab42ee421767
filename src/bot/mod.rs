//! Discord gateway client and event handlers.
//!
//! The bot needs two gateway intents:
//! - `GUILDS` - guild, role and channel data for the cache the gateway
//!   resolves handles from
//! - `GUILD_MEMBERS` - member update events that drive role sync, and the
//!   member chunk that fills the cache they are diffed against (privileged)
//!
//! `GUILD_MEMBERS` is a privileged intent and must be enabled in the Discord
//! Developer Portal for the bot application.

pub mod handler;
pub mod start;
