//! Periodic background jobs.
//!
//! Each configured statistic gets its own repeated job that renames a status
//! channel. Both jobs share one `JobScheduler`, which `main` shuts down as a
//! unit on exit.

pub mod channel_status;
