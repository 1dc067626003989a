//! Options for generating an SSO authorization URL.

use crate::domain::enums::ConnectionType;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

/// The only grant the authorization endpoint supports.
pub const RESPONSE_TYPE_CODE: &str = "code";

/// Parameters for [`crate::application::services::SsoService::get_authorization_url`].
///
/// At least one of `domain`, `connection` or `provider` must be set.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct GetAuthorizationUrlOptions {
    /// The WorkOS project (client) identifier.
    #[validate(length(min = 1, message = "client_id must not be empty"))]
    pub client_id: String,

    /// The enterprise's domain.
    #[validate(length(min = 1))]
    pub domain: Option<String>,

    /// Identifier of a specific connection.
    #[validate(length(min = 1))]
    pub connection: Option<String>,

    /// Authenticate through a provider instead of a domain or connection. Lets users
    /// of any domain sign in; only `GoogleOAuth` is accepted by the API today.
    pub provider: Option<ConnectionType>,

    /// Callback URL the user-agent is sent back to once a code is granted.
    #[validate(url(message = "redirect_uri must be a valid URL"))]
    pub redirect_uri: String,

    /// Opaque value echoed back on the callback.
    pub state: Option<String>,
}

impl GetAuthorizationUrlOptions {
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            ..Default::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    pub fn with_provider(mut self, provider: ConnectionType) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// True when a domain, connection or provider selects who authenticates.
    pub fn has_target(&self) -> bool {
        self.domain.is_some() || self.connection.is_some() || self.provider.is_some()
    }

    /// Query parameters in wire order, starting with `response_type=code`.
    pub fn to_query(&self) -> AuthorizationUrlQuery<'_> {
        AuthorizationUrlQuery {
            response_type: RESPONSE_TYPE_CODE,
            client_id: &self.client_id,
            domain: self.domain.as_deref(),
            connection: self.connection.as_deref(),
            provider: self.provider,
            redirect_uri: &self.redirect_uri,
            state: self.state.as_deref(),
        }
    }
}

/// Wire form of [`GetAuthorizationUrlOptions`].
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct AuthorizationUrlQuery<'a> {
    pub response_type: &'static str,
    pub client_id: &'a str,
    pub domain: Option<&'a str>,
    pub connection: Option<&'a str>,
    pub provider: Option<ConnectionType>,
    pub redirect_uri: &'a str,
    pub state: Option<&'a str>,
}
