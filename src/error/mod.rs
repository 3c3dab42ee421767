//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps the concern-specific
//! errors. Metric and formatting errors are kept as their own enums because
//! callers branch on them: the metric cache degrades on every `MetricError`
//! and the channel status publisher skips a tick on a `FormatError`.

pub mod config;
pub mod format;
pub mod metric;

use thiserror::Error;

use crate::error::{config::ConfigError, format::FormatError, metric::MetricError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so that `?` works
/// across the config, data and service layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Metric provider request failed or returned an unusable response.
    #[error(transparent)]
    MetricErr(#[from] MetricError),

    /// A metric could not be rendered for display.
    #[error(transparent)]
    FormatErr(#[from] FormatError),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// An external entity required for an operation could not be resolved.
    ///
    /// # Fields
    /// - Message describing which handle is absent
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
