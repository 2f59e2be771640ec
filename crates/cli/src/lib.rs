//! # CallDeck CLI
//!
//! Operator console for the outbound call-campaign backend.
//!
//! This crate contains:
//! - The clap command tree and per-group handlers
//! - The application context (dependency injection container)
//! - Rendering helpers (the only module that prints)
//!
//! ## Architecture
//! - Depends on `calldeck-core` for the wizard and submission flows
//! - Depends on `calldeck-infra` for HTTP adapters, config and monitors
//! - Handlers stay print-free and return errors; `render` owns the output

pub mod commands;
pub mod context;
pub mod render;

pub use commands::{run, Cli};
pub use context::AppContext;
