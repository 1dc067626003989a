//! # WorkOS SSO
//!
//! A typed client for the WorkOS Single Sign-On API.
//!
//! ## Architecture
//!
//! The crate keeps the layer split of a service codebase:
//!
//! - **Domain Layer** ([`domain`]) - Records and closed wire enums
//! - **API Layer** ([`api`]) - Option DTOs, request descriptors, the transport trait
//! - **Application Layer** ([`application`]) - Services with one method per API operation
//! - **Infrastructure Layer** ([`infrastructure`]) - The `reqwest`-backed [`WorkOsClient`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use workos_sso::prelude::*;
//!
//! # async fn run() -> Result<(), WorkOsError> {
//! let client = WorkOsClient::new("sk_test_...")?;
//! let sso = client.sso();
//!
//! let url = sso.get_authorization_url(
//!     &GetAuthorizationUrlOptions::new("client_...", "https://app.example.com/callback")
//!         .with_domain("foo-corp.com"),
//! )?;
//! println!("Redirect to {url}");
//!
//! let connections = sso.list_connections(None).await?;
//! for connection in connections {
//!     println!("{} ({})", connection.name, connection.connection_type);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`config::load_from_env`] reads `WORKOS_API_KEY` and friends; see [`config`].
//! Pass the result to [`WorkOsClient::from_config`] and, optionally, to
//! [`telemetry::init_tracing`].

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::{WorkOsError, WorkOsResult};
pub use infrastructure::http::WorkOsClient;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::{
        CreateConnectionOptions, GetAuthorizationUrlOptions, GetProfileOptions,
        GetProfileResponse, ListConnectionsOptions, ListMetadata, WorkOsList,
    };
    pub use crate::api::transport::ApiTransport;
    pub use crate::application::services::SsoService;
    pub use crate::domain::entities::{Connection, ConnectionDomain, Profile};
    pub use crate::domain::enums::{
        ConnectionState, ConnectionStatus, ConnectionType, DirectoryType, PaginationOrder,
    };
    pub use crate::error::{WorkOsError, WorkOsResult};
    pub use crate::infrastructure::http::WorkOsClient;
}
