//! Tracing setup.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Sends logs to the configured file so they never draw over the UI.
///
/// `RUST_LOG` wins over the configured filter. Once a global subscriber is
/// installed, later calls return without touching the log file.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing already initialized");
        return Ok(());
    }

    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(file = %config.file().display(), "Tracing initialized");
    Ok(())
}
