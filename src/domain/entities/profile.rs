//! User profile returned after an SSO exchange.

use crate::domain::enums::ConnectionType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// Identity attributes for a user authenticated through a [`super::Connection`].
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Unique identifier of the user at the identity provider.
    pub idp_id: String,
    pub organization_id: Option<String>,
    pub connection_id: String,
    pub connection_type: ConnectionType,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Attributes exactly as the identity provider sent them.
    #[serde(default)]
    pub raw_attributes: Map<String, Value>,
}

impl Profile {
    /// First and last name joined by a space, when either is present.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }

    /// Looks up a single raw identity provider attribute.
    pub fn raw_attribute(&self, key: &str) -> Option<&Value> {
        self.raw_attributes.get(key)
    }
}
