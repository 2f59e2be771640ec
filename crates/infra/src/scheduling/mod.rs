//! Background monitors with explicit start/stop lifecycles
//!
//! Polling loops for the three long-running concerns:
//! - Campaign monitoring (stats + contact list, partial refresh while calls
//!   are in flight)
//! - Live single-call watching (1 s cadence until the call completes)
//! - Analysis-availability checking (one bounded run per campaign)
//!
//! All monitors follow the same lifecycle rules:
//! - Explicit lifecycle management (start/stop)
//! - Join handles for spawned tasks, awaited with a timeout on stop
//! - Cancellation token support, recreated on restart
//! - Best-effort cancellation on drop

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub mod analysis_scheduler;
pub mod campaign_monitor;
pub mod error;
pub mod live_call_monitor;

pub use analysis_scheduler::AnalysisScheduler;
pub use campaign_monitor::{CampaignMonitor, CampaignMonitorConfig, CampaignSnapshot};
pub use error::{SchedulerError, SchedulerResult};
pub use live_call_monitor::LiveCallMonitor;

/// How long `stop()` waits for a cancelled task to wind down
const JOIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared slot for a monitor's spawned task
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;
