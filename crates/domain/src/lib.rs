//! # CallDeck Domain
//!
//! Data shapes for the CallDeck console: campaign and contact projections as
//! the backend serves them, submission payloads, live-call and analysis read
//! models, client configuration, and the error type the other crates build
//! on. Everything here is plain data with serde derives; the crates above
//! this one do the work, and nothing here depends on another CallDeck crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
