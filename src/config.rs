//! Client configuration loaded from environment variables.
//!
//! ## Required Variables
//!
//! - `WORKOS_API_KEY` - Secret API key (`sk_...`)
//!
//! ## Optional Variables
//!
//! - `WORKOS_CLIENT_ID` - Project client id used by SSO flows
//! - `WORKOS_API_BASE_URL` - API host (default: `https://api.workos.com`)
//! - `WORKOS_REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 30, range: 1-300)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export WORKOS_API_KEY="sk_test_..."
//! export WORKOS_CLIENT_ID="client_..."
//! ```

use crate::infrastructure::http::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Client configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub client_id: Option<String>,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WORKOS_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("WORKOS_API_KEY").context("WORKOS_API_KEY must be set")?;

        let client_id = env::var("WORKOS_CLIENT_ID")
            .ok()
            .filter(|v| !v.is_empty());

        let api_base_url =
            env::var("WORKOS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let request_timeout_secs = env::var("WORKOS_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_key,
            client_id,
            api_base_url,
            request_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_key` is empty
    /// - `api_base_url` is not an absolute `http`/`https` URL
    /// - `request_timeout_secs` is outside 1-300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("WORKOS_API_KEY must not be empty");
        }

        let base_url = Url::parse(&self.api_base_url).with_context(|| {
            format!(
                "WORKOS_API_BASE_URL must be a valid URL, got '{}'",
                self.api_base_url
            )
        })?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            anyhow::bail!(
                "WORKOS_API_BASE_URL must use http or https, got '{}'",
                self.api_base_url
            );
        }

        if !(1..=300).contains(&self.request_timeout_secs) {
            anyhow::bail!(
                "WORKOS_REQUEST_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.request_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API base URL: {}", self.api_base_url);
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        match &self.client_id {
            Some(client_id) => tracing::info!("  Client ID: {}", client_id),
            None => tracing::info!("  Client ID: not set"),
        }
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &mask_secret(&self.api_key))
            .field("client_id", &self.client_id)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Masks a secret for logging, keeping only the last four characters.
///
/// - `sk_test_a1b2c3d4` → `***c3d4`
/// - secrets of eight characters or fewer → `***`
pub(crate) fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{tail}")
}

/// Loads and validates configuration from environment variables.
///
/// A `.env` file in the working directory is loaded first if present; variables
/// already set in the environment take precedence.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
