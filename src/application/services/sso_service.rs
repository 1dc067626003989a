//! Single Sign-On service.

use crate::api::dto::{
    CreateConnectionOptions, GetAuthorizationUrlOptions, GetProfileOptions, GetProfileResponse,
    ListConnectionsOptions, WorkOsList,
};
use crate::api::request::{ApiRequest, encode_query};
use crate::api::transport::ApiTransport;
use crate::domain::entities::Connection;
use crate::error::{WorkOsError, WorkOsResult};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use url::Url;
use validator::Validate;

pub const AUTHORIZE_PATH: &str = "/sso/authorize";
pub const TOKEN_PATH: &str = "/sso/token";
pub const CONNECTIONS_PATH: &str = "/connections";

/// Operations of the WorkOS SSO API.
///
/// Each method validates its input, describes the call as an [`ApiRequest`] and
/// hands it to the transport. Responses are decoded into typed records.
pub struct SsoService<T: ApiTransport> {
    transport: Arc<T>,
}

impl<T: ApiTransport> SsoService<T> {
    /// Creates a new SSO service.
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Builds the URL that starts the OAuth 2.0 authorization code flow.
    ///
    /// No request is sent; the caller redirects the user-agent to the result.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::InvalidArgument`] if none of `domain`, `connection` or
    /// `provider` is set (checked first), or if field validation fails.
    /// Returns [`WorkOsError::Config`] if the transport's base URL is malformed.
    pub fn get_authorization_url(
        &self,
        options: &GetAuthorizationUrlOptions,
    ) -> WorkOsResult<String> {
        if !options.has_target() {
            return Err(WorkOsError::invalid_argument(
                "Incomplete arguments. Need to specify either a 'connection', 'domain' or 'provider'",
                json!({"required_one_of": ["connection", "domain", "provider"]}),
            ));
        }
        options.validate()?;

        let query = encode_query(&options.to_query())?;
        let base_url = self.transport.api_base_url();

        let mut url = Url::parse(&format!("{base_url}{AUTHORIZE_PATH}")).map_err(|e| {
            WorkOsError::Config(format!("Invalid API base URL '{base_url}': {e}"))
        })?;
        url.set_query(Some(&query));

        Ok(url.into())
    }

    /// Exchanges an authorization code for the authenticated user's profile.
    ///
    /// The API key is sent as `client_secret`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::InvalidArgument`] if `client_id` or `code` is empty.
    /// Transport, HTTP and decoding errors propagate unchanged.
    pub async fn get_profile(
        &self,
        options: &GetProfileOptions,
    ) -> WorkOsResult<GetProfileResponse> {
        options.validate()?;

        let api_key = self.transport.api_key();
        let request = ApiRequest::post(TOKEN_PATH).with_form(&options.to_token_form(&api_key))?;

        self.send(request).await
    }

    /// Activates a draft connection.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::InvalidArgument`] if `source` is empty.
    pub async fn create_connection(
        &self,
        options: &CreateConnectionOptions,
    ) -> WorkOsResult<Connection> {
        options.validate()?;

        let request = ApiRequest::post(CONNECTIONS_PATH).with_json(options)?;
        self.send(request).await
    }

    /// Lists connections, optionally filtered.
    ///
    /// Without options the request carries no query string.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::InvalidArgument`] if `limit` is outside 1-100.
    pub async fn list_connections(
        &self,
        options: Option<&ListConnectionsOptions>,
    ) -> WorkOsResult<WorkOsList<Connection>> {
        let mut request = ApiRequest::get(CONNECTIONS_PATH);
        if let Some(options) = options {
            options.validate()?;
            request = request.with_query(options)?;
        }

        self.send(request).await
    }

    /// Fetches a single connection.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::InvalidArgument`] for an empty id and
    /// [`WorkOsError::NotFound`] if the API does not know it.
    pub async fn get_connection(&self, id: &str) -> WorkOsResult<Connection> {
        let request = ApiRequest::get(connection_path(id)?);
        self.send(request).await
    }

    /// Deletes a connection.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOsError::InvalidArgument`] for an empty id and
    /// [`WorkOsError::NotFound`] if the API does not know it.
    pub async fn delete_connection(&self, id: &str) -> WorkOsResult<()> {
        let request = ApiRequest::delete(connection_path(id)?);
        self.transport.execute(request).await?;
        Ok(())
    }

    async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> WorkOsResult<R> {
        let body = self.transport.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// `/connections/{id}` with the id substituted verbatim.
fn connection_path(id: &str) -> WorkOsResult<String> {
    if id.trim().is_empty() {
        return Err(WorkOsError::invalid_argument(
            "Connection id must not be empty",
            json!({"field": "id"}),
        ));
    }

    Ok(format!("{CONNECTIONS_PATH}/{id}"))
}
