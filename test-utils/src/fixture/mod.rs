//! Canned external API responses.

pub mod youtube;
