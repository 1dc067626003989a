//! DTOs for exchanging an authorization code for a profile.

use crate::domain::entities::Profile;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";

/// Parameters for [`crate::application::services::SsoService::get_profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GetProfileOptions {
    /// The WorkOS project (client) identifier.
    #[validate(length(min = 1, message = "client_id must not be empty"))]
    pub client_id: String,

    /// Authorization code received on the redirect callback.
    #[validate(length(min = 1, message = "code must not be empty"))]
    pub code: String,
}

impl GetProfileOptions {
    pub fn new(client_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            code: code.into(),
        }
    }

    /// Form body posted to `/sso/token`. The API key travels as `client_secret`.
    pub fn to_token_form<'a>(&'a self, client_secret: &'a str) -> TokenExchangeForm<'a> {
        TokenExchangeForm {
            client_id: &self.client_id,
            client_secret,
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE,
            code: &self.code,
        }
    }
}

/// Wire form of the token exchange.
#[derive(Serialize)]
pub struct TokenExchangeForm<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'static str,
    pub code: &'a str,
}

impl std::fmt::Debug for TokenExchangeForm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenExchangeForm")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("grant_type", &self.grant_type)
            .field("code", &self.code)
            .finish()
    }
}

/// Response of a successful token exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProfileResponse {
    pub access_token: String,
    pub profile: Profile,
}
