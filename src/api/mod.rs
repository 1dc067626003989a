//! Request/response marshalling layer.
//!
//! # Modules
//!
//! - [`dto`] - Option records and the paginated list wrapper
//! - [`request`] - Request descriptors and query/form/JSON encoding
//! - [`transport`] - The [`transport::ApiTransport`] dispatcher trait

pub mod dto;
pub mod request;
pub mod transport;
