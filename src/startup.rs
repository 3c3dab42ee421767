use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "mcoding_bot=info,serenity=warn";

/// Installs the global fmt subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();
}

/// Builds the HTTP client used for metric provider requests.
///
/// Redirects are disabled and every request is bounded by the configured
/// provider timeout, so a hung fetch cannot stall a publish tick.
///
/// # Arguments
/// - `config` - Application configuration containing the provider timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - The TLS backend could not be initialized
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.youtube.timeout)
        .build()?;

    Ok(client)
}
