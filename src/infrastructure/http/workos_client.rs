//! `reqwest`-backed dispatcher.

use crate::api::request::{ApiRequest, RequestBody};
use crate::api::transport::ApiTransport;
use crate::application::services::SsoService;
use crate::config::{Config, mask_secret};
use crate::error::{WorkOsError, WorkOsResult};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.workos.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("workos-sso-rust/", env!("CARGO_PKG_VERSION"));

/// Shared client for the WorkOS API.
///
/// Attaches the API key as a bearer token, sends requests over a pooled
/// `reqwest::Client` and maps non-2xx responses onto [`WorkOsError`]. Cloning is
/// cheap and clones share the connection pool.
#[derive(Clone)]
pub struct WorkOsClient {
    api_key: String,
    api_base_url: String,
    http_client: Client,
}

impl WorkOsClient {
    /// Creates a client for the production API with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::Config`] if the API key is empty or the HTTP client
    /// cannot be built.
    pub fn new(api_key: impl Into<String>) -> WorkOsResult<Self> {
        Self::build(
            api_key.into(),
            DEFAULT_API_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Creates a client from loaded [`Config`].
    ///
    /// # Errors
    ///
    /// See [`WorkOsClient::new`].
    pub fn from_config(config: &Config) -> WorkOsResult<Self> {
        Self::build(
            config.api_key.clone(),
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    pub fn with_http_client(
        api_key: impl Into<String>,
        api_base_url: impl Into<String>,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: normalize_base_url(api_base_url.into()),
            http_client,
        }
    }

    /// Points the client at another API host (staging, a proxy, a mock server).
    pub fn with_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = normalize_base_url(api_base_url.into());
        self
    }

    /// SSO operations dispatched through this client.
    pub fn sso(&self) -> SsoService<WorkOsClient> {
        SsoService::new(Arc::new(self.clone()))
    }

    fn build(api_key: String, api_base_url: &str, timeout: Duration) -> WorkOsResult<Self> {
        if api_key.trim().is_empty() {
            return Err(WorkOsError::Config("API key must not be empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WorkOsError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            api_base_url: normalize_base_url(api_base_url.to_string()),
            http_client,
        })
    }
}

impl fmt::Debug for WorkOsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkOsClient")
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[async_trait]
impl ApiTransport for WorkOsClient {
    fn api_base_url(&self) -> String {
        self.api_base_url.clone()
    }

    fn api_key(&self) -> String {
        self.api_key.clone()
    }

    async fn execute(&self, request: ApiRequest) -> WorkOsResult<String> {
        let url = format!("{}{}", self.api_base_url, request.path_and_query());
        debug!(method = %request.method, path = %request.path, "WorkOS request");

        let mut builder = self
            .http_client
            .request(request.method, &url)
            .bearer_auth(&self.api_key);

        if let Some(content_type) = request.body.content_type() {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        match request.body {
            RequestBody::Json(body) | RequestBody::Form(body) => builder = builder.body(body),
            RequestBody::Empty => {}
        }

        let response = builder.send().await?;
        handle_response(response).await
    }
}

async fn handle_response(response: reqwest::Response) -> WorkOsResult<String> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.text().await?);
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let body = response.text().await.unwrap_or_default();
    let (message, details) = parse_error_body(&body, status);

    Err(match status {
        StatusCode::UNAUTHORIZED => WorkOsError::Unauthorized { message },
        StatusCode::NOT_FOUND => WorkOsError::NotFound { message },
        StatusCode::UNPROCESSABLE_ENTITY => WorkOsError::UnprocessableEntity { message, details },
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("WorkOS API rate limited, retry after {:?}s", retry_after);
            WorkOsError::RateLimited {
                retry_after_secs: retry_after,
            }
        }
        _ => WorkOsError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

/// Extracts a human-readable message from an error body.
///
/// WorkOS errors are JSON with `message`, or `error`/`error_description` on the
/// OAuth token endpoint. Anything else is passed through as-is.
fn parse_error_body(body: &str, status: StatusCode) -> (String, Value) {
    if body.trim().is_empty() {
        return (format!("HTTP {status}"), Value::Null);
    }

    match serde_json::from_str::<Value>(body) {
        Ok(json) => {
            let message = ["message", "error_description", "error"]
                .iter()
                .find_map(|key| json.get(*key).and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string());
            (message, json)
        }
        Err(_) => (body.to_string(), Value::Null),
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(matches!(
            WorkOsClient::new("  "),
            Err(WorkOsError::Config(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WorkOsClient::new("sk_test_123")
            .unwrap()
            .with_base_url("http://localhost:8080/");

        assert_eq!(client.api_base_url(), "http://localhost:8080");
        assert_eq!(client.api_key(), "sk_test_123");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            api_key: "sk_test_from_config".to_string(),
            client_id: None,
            api_base_url: "http://localhost:9999/".to_string(),
            request_timeout_secs: 5,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        let client = WorkOsClient::from_config(&config).unwrap();

        assert_eq!(client.api_base_url(), "http://localhost:9999");
        assert_eq!(client.api_key(), "sk_test_from_config");
    }

    #[test]
    fn test_debug_masks_api_key() {
        let client = WorkOsClient::new("sk_test_abcdef123456").unwrap();
        let debug = format!("{client:?}");

        assert!(!debug.contains("sk_test_abcdef123456"));
        assert!(debug.contains("https://api.workos.com"));
    }

    #[test]
    fn test_parse_error_body_prefers_message() {
        let (message, details) = parse_error_body(
            r#"{"message":"Connection not found","code":"entity_not_found"}"#,
            StatusCode::NOT_FOUND,
        );

        assert_eq!(message, "Connection not found");
        assert_eq!(details["code"], json!("entity_not_found"));
    }

    #[test]
    fn test_parse_error_body_oauth_shape() {
        let (message, _) = parse_error_body(
            r#"{"error":"invalid_grant","error_description":"The code has expired."}"#,
            StatusCode::BAD_REQUEST,
        );

        assert_eq!(message, "The code has expired.");
    }

    #[test]
    fn test_parse_error_body_plain_and_empty() {
        let (message, details) = parse_error_body("Bad Gateway", StatusCode::BAD_GATEWAY);
        assert_eq!(message, "Bad Gateway");
        assert!(details.is_null());

        let (message, _) = parse_error_body("", StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(message, "HTTP 503 Service Unavailable");
    }
}
