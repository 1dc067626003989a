//! Dispatcher seam between services and the network.

use crate::api::request::ApiRequest;
use crate::error::WorkOsResult;
use async_trait::async_trait;

/// Executes [`ApiRequest`]s against the WorkOS API.
///
/// Implementations attach credentials, send the request and interpret the HTTP
/// status. A successful call yields the raw response body (possibly empty);
/// decoding into typed records is left to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::WorkOsClient`] - `reqwest`-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Base URL of the API, without a trailing slash (e.g. `https://api.workos.com`).
    fn api_base_url(&self) -> String;

    /// Secret API key. Sent as a bearer token and as `client_secret` on token exchange.
    fn api_key(&self) -> String;

    /// Sends the request and returns the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::WorkOsError::Transport`] on network failure and the
    /// HTTP variants of [`crate::error::WorkOsError`] on non-2xx responses.
    async fn execute(&self, request: ApiRequest) -> WorkOsResult<String>;
}
