//! HTTP dispatcher for the WorkOS API.

mod workos_client;

pub use workos_client::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, WorkOsClient};
