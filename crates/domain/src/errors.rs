//! The error type every CallDeck crate builds on
//!
//! Infrastructure adapters fold transport, file, and backend failures into
//! [`CallDeckError`] categories at the boundary; everything above works in
//! terms of these.

use thiserror::Error;

/// Top-level CallDeck error
#[derive(Error, Debug)]
pub enum CallDeckError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("File error: {0}")]
    File(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias for CallDeck operations
pub type Result<T> = std::result::Result<T, CallDeckError>;

/// A status wire name that no enum variant claims
///
/// Produced by the `FromStr` impls that [`crate::status_strings!`] generates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} value {value:?}")]
pub struct ParseStatusError {
    kind: &'static str,
    value: String,
}

impl ParseStatusError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}
