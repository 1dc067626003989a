//! Connection records.

use crate::domain::enums::{ConnectionState, ConnectionStatus, ConnectionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A configured link between a WorkOS environment and an identity provider.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub organization_id: Option<String>,
    pub connection_type: ConnectionType,
    pub name: String,
    pub state: ConnectionState,
    /// Legacy linked flag. Prefer [`Connection::state`].
    pub status: Option<ConnectionStatus>,
    #[serde(default)]
    pub domains: Vec<ConnectionDomain>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    /// Returns true if the connection can currently authenticate users.
    pub fn is_active(&self) -> bool {
        self.state == ConnectionState::Active
    }

    /// Returns true if `domain` is routed to this connection (ASCII case-insensitive).
    pub fn serves_domain(&self, domain: &str) -> bool {
        self.domains
            .iter()
            .any(|d| d.domain.eq_ignore_ascii_case(domain))
    }
}

/// A domain whose users are routed to a [`Connection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDomain {
    pub id: String,
    pub domain: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn connection_json() -> serde_json::Value {
        json!({
            "object": "connection",
            "id": "conn_01E4ZCR3C56J083X43JQXF3JK5",
            "organization_id": "org_01EHWNCE74X7JSDV0X3SZ3KJNY",
            "connection_type": "GoogleOAuth",
            "name": "Foo Corp",
            "state": "active",
            "status": "linked",
            "domains": [
                {
                    "object": "connection_domain",
                    "id": "conn_domain_01EHWNFTAFCF3CQAE5A9Q0P1YB",
                    "domain": "foo-corp.com"
                }
            ],
            "created_at": "2021-06-25T19:07:33.155Z",
            "updated_at": "2021-06-25T19:07:33.155Z"
        })
    }

    #[test]
    fn test_decode_connection() {
        let connection: Connection = serde_json::from_value(connection_json()).unwrap();

        assert_eq!(connection.id, "conn_01E4ZCR3C56J083X43JQXF3JK5");
        assert_eq!(connection.connection_type, ConnectionType::GoogleOAuth);
        assert_eq!(connection.state, ConnectionState::Active);
        assert_eq!(connection.status, Some(ConnectionStatus::Linked));
        assert_eq!(connection.domains.len(), 1);
        assert!(connection.is_active());
        assert!(connection.serves_domain("FOO-CORP.com"));
        assert!(!connection.serves_domain("bar-corp.com"));
    }

    #[test]
    fn test_round_trip_omits_absent_fields() {
        let mut value = connection_json();
        let object = value.as_object_mut().unwrap();
        object.remove("organization_id");
        object.remove("status");
        object.remove("domains");

        let connection: Connection = serde_json::from_value(value).unwrap();
        assert!(connection.organization_id.is_none());
        assert!(connection.domains.is_empty());

        let encoded = serde_json::to_value(&connection).unwrap();
        assert!(encoded.get("organization_id").is_none());
        assert!(encoded.get("status").is_none());
        assert_eq!(encoded["state"], "active");
        assert_eq!(encoded["connection_type"], "GoogleOAuth");

        let decoded: Connection = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, connection);
    }

    #[test]
    fn test_unknown_connection_type_fails() {
        let mut value = connection_json();
        value["connection_type"] = json!("CarrierPigeonSAML");

        assert!(serde_json::from_value::<Connection>(value).is_err());
    }
}
