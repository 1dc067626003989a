//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization and validator for input validation.
//! Absent optional fields are omitted from every wire form.

pub mod authorization_url;
pub mod connections;
pub mod pagination;
pub mod profile;

pub use authorization_url::GetAuthorizationUrlOptions;
pub use connections::{CreateConnectionOptions, ListConnectionsOptions};
pub use pagination::{ListMetadata, WorkOsList};
pub use profile::{GetProfileOptions, GetProfileResponse};
