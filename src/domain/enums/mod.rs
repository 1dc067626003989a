//! Closed vocabularies exchanged with the WorkOS API.
//!
//! Every enum maps one-to-one onto a fixed wire string. Serde, [`std::fmt::Display`]
//! and [`std::str::FromStr`] all agree on that mapping, and decoding an unknown
//! value is an error rather than a fallback variant.
//!
//! - [`DirectoryType`] - Directory Sync provider integrations
//! - [`ConnectionType`] - SSO connection providers
//! - [`ConnectionState`] - Lifecycle state of a connection
//! - [`ConnectionStatus`] - Deprecated linked/unlinked flag
//! - [`PaginationOrder`] - Sort order for list endpoints

/// Declares a fieldless enum together with its wire strings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact string used on the wire.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::enums::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::domain::enums::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

mod connection_state;
mod connection_status;
mod connection_type;
mod directory_type;
mod pagination_order;

pub use connection_state::ConnectionState;
pub use connection_status::ConnectionStatus;
pub use connection_type::ConnectionType;
pub use directory_type::DirectoryType;
pub use pagination_order::PaginationOrder;

/// Returned by `FromStr` when a string is not a known wire value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} value: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
