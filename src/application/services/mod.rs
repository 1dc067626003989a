//! API services for the application layer.

pub mod sso_service;

pub use sso_service::SsoService;
