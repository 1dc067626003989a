//! Domain model of the WorkOS SSO API.
//!
//! # Architecture
//!
//! - [`entities`] - Records decoded from API responses
//! - [`enums`] - Closed wire vocabularies (connection types, directory types, states)
//!
//! The domain layer has no knowledge of HTTP. Request construction lives in
//! [`crate::api`] and dispatch in [`crate::infrastructure`].

pub mod entities;
pub mod enums;
