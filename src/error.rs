//! Error taxonomy for every client operation.
//!
//! Failures fall into three groups:
//!
//! - Local precondition and validation failures, raised before any request is sent
//!   ([`WorkOsError::InvalidArgument`], [`WorkOsError::Encode`])
//! - Transport and HTTP failures surfaced by the dispatcher
//! - Response decoding failures ([`WorkOsError::Decode`])
//!
//! Nothing is retried locally; all errors propagate to the caller.

use serde_json::Value;
use validator::ValidationErrors;

/// Result alias used throughout the crate.
pub type WorkOsResult<T> = Result<T, WorkOsError>;

#[derive(Debug, thiserror::Error)]
pub enum WorkOsError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String, details: Value },

    #[error("Unauthorized (401): {message}")]
    Unauthorized { message: String },

    #[error("Not found (404): {message}")]
    NotFound { message: String },

    #[error("Unprocessable entity (422): {message}")]
    UnprocessableEntity { message: String, details: Value },

    #[error("Rate limited, retry after {retry_after_secs:?}s")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("WorkOS API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl WorkOsError {
    pub fn invalid_argument(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            details,
        }
    }

    pub fn encode(message: impl ToString) -> Self {
        Self::Encode(message.to_string())
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::UnprocessableEntity { .. } => Some(422),
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for WorkOsError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        Self::invalid_argument("Invalid options", details)
    }
}
