//! Domain models.
//!
//! - `metric` - the cached statistics snapshot and the dimensions published from it
//! - `discord` - resolved Discord handles, role grant rule and membership transitions
//! - `youtube` - wire types for the metric provider response

pub mod discord;
pub mod metric;
pub mod youtube;
