//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON,
//! simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, role::role_json};
//!
//! let guild = create_test_guild(
//!     123456789,
//!     "Test Guild",
//!     &[role_json(111111111, "Patron", 0xF96854, 10)],
//! );
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `role::role_json` - Raw role payload for embedding in a guild

pub mod guild;
pub mod role;

pub use guild::create_test_guild;
pub use role::create_test_role;
