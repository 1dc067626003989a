//! DTOs for connection management endpoints.

use crate::domain::enums::{ConnectionType, PaginationOrder};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

/// Activates a draft connection created in the WorkOS dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateConnectionOptions {
    /// Identifier of the draft connection to activate.
    #[validate(length(min = 1, message = "source must not be empty"))]
    pub source: String,
}

impl CreateConnectionOptions {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Filters and cursor parameters for listing connections.
///
/// Every field is optional; the default value lists all connections.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ListConnectionsOptions {
    pub connection_type: Option<ConnectionType>,
    pub domain: Option<String>,
    pub organization_id: Option<String>,

    /// Page size.
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,

    /// Cursor: return records before this id.
    pub before: Option<String>,

    /// Cursor: return records after this id.
    pub after: Option<String>,

    pub order: Option<PaginationOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::encode_query;

    #[test]
    fn test_default_encodes_to_empty_query() {
        let query = encode_query(&ListConnectionsOptions::default()).unwrap();
        assert_eq!(query, "");
    }

    #[test]
    fn test_filters_encoded_in_declaration_order() {
        let options = ListConnectionsOptions {
            connection_type: Some(ConnectionType::AzureSaml),
            organization_id: Some("org_123".to_string()),
            limit: Some(25),
            order: Some(PaginationOrder::Desc),
            ..Default::default()
        };

        let query = encode_query(&options).unwrap();

        assert_eq!(
            query,
            "connection_type=AzureSAML&organization_id=org_123&limit=25&order=desc"
        );
    }

    #[test]
    fn test_limit_range() {
        let mut options = ListConnectionsOptions {
            limit: Some(0),
            ..Default::default()
        };
        assert!(options.validate().is_err());

        options.limit = Some(101);
        assert!(options.validate().is_err());

        options.limit = Some(100);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_create_options_json() {
        let options = CreateConnectionOptions::new("draft_conn_123");
        let json = serde_json::to_string(&options).unwrap();

        assert_eq!(json, r#"{"source":"draft_conn_123"}"#);
        assert_eq!(
            serde_json::from_str::<CreateConnectionOptions>(&json).unwrap(),
            options
        );
    }
}
