//! Macro for the closed string enumerations of the wire form.
//!
//! **`wire_enum!`** generates, for each enumeration:
//! - the enum with serde renames matching the wire values
//! - `ALL` and `WIRE_VALUES` tables in declaration order
//! - `as_str()`, `Display`, and a `FromStr` that fails with
//!   [`UnknownVariant`](crate::domain::foundation::UnknownVariant)
//!
//! # Usage
//!
//! ```ignore
//! wire_enum! {
//!     /// Direction of a metric.
//!     Trend, kind = "trend" {
//!         Up => "up",
//!         Down => "down",
//!         Stable => "stable",
//!     }
//! }
//! ```

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Accepted wire values, in declaration order.
            pub const WIRE_VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::foundation::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::domain::foundation::UnknownVariant::new(
                        $kind,
                        other,
                        Self::WIRE_VALUES,
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}
