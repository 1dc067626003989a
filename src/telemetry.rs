//! Opt-in logging setup for applications embedding the client.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! the application's call. [`init_tracing`] wires one up from [`Config`].

use crate::config::Config;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber honouring `log_level` and `log_format`.
///
/// `RUST_LOG` directives take precedence over `config.log_level`.
///
/// # Errors
///
/// Returns an error if the log level cannot be parsed or a global subscriber is
/// already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = build_filter(&config.log_level)?;

    let result = if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}

fn build_filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| anyhow!("Invalid log level '{log_level}': {e}"))
}
