//! Campaign monitoring domain
//!
//! Pure pieces of the polling machinery: deciding between full and partial
//! refreshes, discarding stale in-flight responses, and probing post-call
//! analysis availability. The tokio schedulers that drive these live in the
//! infra crate.

pub mod analysis;
pub mod ports;
pub mod refresh;

pub use analysis::AnalysisChecker;
pub use ports::{AnalysisGateway, MonitoringGateway};
pub use refresh::{PollGate, RefreshPlan};
