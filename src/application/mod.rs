//! Application layer services exposing one method per API operation.
//!
//! Services validate inputs, build [`crate::api::request::ApiRequest`]s and
//! decode responses. Dispatch goes through the
//! [`crate::api::transport::ApiTransport`] trait so services can be tested
//! without a network.
//!
//! # Available Services
//!
//! - [`services::sso_service::SsoService`] - SSO authorization, profiles and connections

pub mod services;
