//! Structured logging with tracing
//!
//! Logs go to stderr so that command output on stdout stays machine-readable.

use std::path::Path;

use anyhow::{Result, bail};
use tracing::{Level, debug, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

/// Environment variable overriding the configured level filter
pub const LOG_ENV_VAR: &str = "ASSETLINT_LOG";

/// Initialize logging with the provided configuration
///
/// Calling it again once a subscriber is installed is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!("Logging initialized with level: {}", level);
    }
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => bail!("Invalid log level: {level}. Use trace, debug, info, warn, or error"),
    }
}

pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        debug!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
