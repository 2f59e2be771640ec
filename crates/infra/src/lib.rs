//! # CallDeck Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP adapters for the campaign backend (envelope decoding, error mapping)
//! - Contact file parsing (CSV and Excel)
//! - Configuration loading (environment variables and config files)
//! - Background monitors with explicit start/stop lifecycles
//!
//! ## Architecture
//! - Implements traits defined in `calldeck-core`
//! - Depends on `calldeck-domain` and `calldeck-core`
//! - Contains all "impure" code (network, filesystem, timers)

pub mod api;
pub mod config;
pub mod errors;
pub mod files;
pub mod scheduling;

// Re-export commonly used items
pub use api::{AnalysisApi, ApiClient, ApiClientConfig, CallsApi, CampaignsApi, DirectoryApi};
pub use errors::InfraError;
pub use files::load_contact_table;
pub use scheduling::{
    AnalysisScheduler, CampaignMonitor, CampaignMonitorConfig, CampaignSnapshot, LiveCallMonitor,
    SchedulerError, SchedulerResult,
};
