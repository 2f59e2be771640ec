//! Wire-name conversions for status enums
//!
//! Backend payloads and command-line arguments both speak in lowercase wire
//! names ("running", "no-answer"), so every status enum carries the same
//! three conversions: `as_str` for rendering, `Display` on top of it, and a
//! case-insensitive `FromStr`. [`status_strings!`] generates all three from
//! one variant-to-name table.
//!
//! ```rust
//! use calldeck_domain::status_strings;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum LineState {
//!     Idle,
//!     Busy,
//!     OnHold,
//! }
//!
//! status_strings!(LineState {
//!     Idle => "idle",
//!     Busy => "busy",
//!     OnHold => "on-hold",
//! });
//!
//! assert_eq!(LineState::OnHold.as_str(), "on-hold");
//! assert_eq!("BUSY".parse::<LineState>(), Ok(LineState::Busy));
//! ```

/// Generate `as_str`, `Display`, and a case-insensitive `FromStr` for a
/// status enum from its variant-to-wire-name table.
///
/// Parsing an unknown name yields a [`crate::ParseStatusError`] carrying the
/// enum name and the rejected value.
#[macro_export]
macro_rules! status_strings {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Wire name as the backend and the command line spell it
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseStatusError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.to_ascii_lowercase().as_str() {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::ParseStatusError::new(stringify!($name), value)),
                }
            }
        }
    };
}
