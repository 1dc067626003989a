#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::MockServer;
use workos_sso::WorkOsClient;

pub const API_KEY: &str = "sk_test_integration_key";
pub const CLIENT_ID: &str = "client_01EHQMYV6MBK39QC5PZXHY59C3";

/// Creates a `WorkOsClient` pointing at a wiremock server.
pub fn test_client(server: &MockServer) -> WorkOsClient {
    WorkOsClient::with_http_client(API_KEY, server.uri(), reqwest::Client::new())
}

pub fn connection_json(id: &str) -> Value {
    json!({
        "object": "connection",
        "id": id,
        "organization_id": "org_01EHWNCE74X7JSDV0X3SZ3KJNY",
        "connection_type": "OktaSAML",
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

pub fn connection_list_json(ids: &[&str], after: Option<&str>) -> Value {
    json!({
        "object": "list",
        "data": ids.iter().map(|id| connection_json(id)).collect::<Vec<_>>(),
        "list_metadata": { "before": null, "after": after }
    })
}

pub fn profile_response_json() -> Value {
    json!({
        "access_token": "01DMEK0J53CVMC32CK5SE0KZ8Q",
        "profile": {
            "object": "profile",
            "id": "prof_01DMC79VCBZ0NY2099737PSVF1",
            "idp_id": "00u1a0ufowBJlzPlk357",
            "organization_id": "org_01EHWNCE74X7JSDV0X3SZ3KJNY",
            "connection_id": "conn_01E4ZCR3C56J083X43JQXF3JK5",
            "connection_type": "OktaSAML",
            "email": "todd@foo-corp.com",
            "first_name": "Todd",
            "last_name": "Rundgren",
            "raw_attributes": {
                "email": "todd@foo-corp.com",
                "groups": ["Engineering"]
            }
        }
    })
}
