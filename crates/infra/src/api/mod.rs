//! Backend API adapters for CallDeck
//!
//! This module provides the HTTP-based implementations of the core ports
//! plus direct endpoint wrappers for the CLI.
//!
//! # Architecture
//!
//! - All requests go through [`ApiClient`] (no direct reqwest use)
//! - Every response is decoded through the `status` envelope
//! - Requests are sent exactly once; polling callers decide when to ask again
//! - Adapters convert [`ApiError`] into the domain error at the port
//!   boundary

pub mod analysis;
pub mod calls;
pub mod campaigns;
pub mod client;
pub mod directory;
pub(crate) mod envelope;
pub mod errors;

pub use analysis::AnalysisApi;
pub use calls::CallsApi;
pub use campaigns::CampaignsApi;
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use directory::DirectoryApi;
pub use errors::{ApiError, ApiErrorCategory};
