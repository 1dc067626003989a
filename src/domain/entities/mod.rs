//! Records returned by the WorkOS SSO API.
//!
//! Entities are plain data carriers decoded from JSON responses. They are
//! immutable after construction and carry no behaviour beyond small accessors.
//!
//! # Entity Types
//!
//! - [`Connection`] - A configured identity provider link
//! - [`ConnectionDomain`] - A domain routed to a connection
//! - [`Profile`] - Identity attributes of a user after an SSO exchange

pub mod connection;
pub mod profile;

pub use connection::{Connection, ConnectionDomain};
pub use profile::Profile;
