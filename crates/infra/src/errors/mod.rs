//! Infrastructure error conversions
//!
//! External crate errors (HTTP, CSV, spreadsheets, IO) converted into the
//! domain error type at the infrastructure boundary.

pub mod conversions;

pub use conversions::InfraError;
