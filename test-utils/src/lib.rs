//! mCoding Bot Test Utils
//!
//! Shared testing utilities for the bot's unit tests. The bot talks to two
//! external systems, Discord through Serenity and the YouTube Data API through
//! reqwest, and this crate provides realistic payloads for both.
//!
//! # Overview
//!
//! - **serenity**: factories for Serenity structs (Guild, Role) built by
//!   deserializing JSON the way Discord's API would return it
//! - **fixture**: JSON bodies for the YouTube `channels` endpoint, both valid
//!   and each of the degraded shapes the metric cache must survive
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::fixture::youtube;
//! use test_utils::serenity::{create_test_guild, role::role_json};
//!
//! let body = youtube::channel_response("UC123", 1000, 2000);
//! let guild = create_test_guild(1, "Test Guild", &[role_json(2, "Patron", 0, 1)]);
//! ```

pub mod fixture;
pub mod serenity;
