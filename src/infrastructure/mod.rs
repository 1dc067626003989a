//! Infrastructure layer: network access to the WorkOS API.
//!
//! - [`http`] - [`http::WorkOsClient`], the `reqwest`-backed [`crate::api::transport::ApiTransport`]

pub mod http;
