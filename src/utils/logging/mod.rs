//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured level so operators can raise
//! verbosity for one module without touching the config file.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Build the event filter from `RUST_LOG`, or from `level` when it is unset
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    build_filter_from(std::env::var("RUST_LOG").ok(), level)
}

fn build_filter_from(rust_log: Option<String>, level: &str) -> Result<EnvFilter> {
    let directives = rust_log
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| level.trim().to_ascii_lowercase());
    Ok(EnvFilter::try_new(directives)?)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?,
    }

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
