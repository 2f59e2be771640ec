//! Background run of the analysis-availability checker
//!
//! Wraps [`AnalysisChecker`] in a start/stop lifecycle: one bounded
//! check-until-complete run per `start()`, cancellable mid-run, with live
//! progress readable while the run is going and the final progress recorded
//! when it ends.

use std::sync::Arc;

use calldeck_core::monitoring::{AnalysisChecker, AnalysisGateway};
use calldeck_domain::{AnalysisAvailability, AnalysisProgress, CampaignContact, MonitorConfig};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};
use crate::scheduling::{JOIN_TIMEOUT, TaskHandle};

/// Background driver for post-call analysis availability checks
pub struct AnalysisScheduler {
    checker: Arc<AnalysisChecker>,
    contacts: Arc<RwLock<Vec<CampaignContact>>>,
    outcome: Arc<RwLock<Option<AnalysisProgress>>>,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl AnalysisScheduler {
    /// Scheduler with the monitoring bounds from `config`
    pub fn new(gateway: Arc<dyn AnalysisGateway>, config: &MonitorConfig) -> Self {
        Self {
            checker: Arc::new(AnalysisChecker::with_config(gateway, config)),
            contacts: Arc::new(RwLock::new(Vec::new())),
            outcome: Arc::new(RwLock::new(None)),
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start one bounded availability run over `contacts`.
    ///
    /// The run sweeps the completed contacts, retries the stragglers up to
    /// the configured number of rounds, then records the final progress and
    /// winds itself down.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::AlreadyRunning`] if a run is already going.
    #[instrument(skip(self, contacts), fields(contacts = contacts.len()))]
    pub async fn start(&mut self, contacts: Vec<CampaignContact>) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        info!(contacts = contacts.len(), "starting analysis availability run");

        *self.contacts.write() = contacts;
        *self.outcome.write() = None;

        // The previous token is spent if this is a restart
        self.cancellation_token = CancellationToken::new();

        let checker = Arc::clone(&self.checker);
        let contacts = Arc::clone(&self.contacts);
        let outcome = Arc::clone(&self.outcome);
        let cancel = self.cancellation_token.clone();

        let handle = tokio::spawn(async move {
            let contacts = contacts.read().clone();
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("analysis availability run cancelled");
                }
                progress = checker.check_until_complete(&contacts) => {
                    info!(
                        available = progress.available,
                        total = progress.total,
                        "analysis availability run finished"
                    );
                    *outcome.write() = Some(progress);
                }
            }
            // Retire the token on natural completion too, so drop stays quiet
            cancel.cancel();
        });

        *self.task_handle.lock().await = Some(handle);

        Ok(())
    }

    /// Cancel a run in flight.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NotRunning`] if no run is going (including
    /// after a run finished by itself), or a timeout/join error if the task
    /// fails to wind down.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        info!("stopping analysis availability run");

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            tokio::time::timeout(JOIN_TIMEOUT, handle)
                .await
                .map_err(|source| SchedulerError::Timeout { duration: JOIN_TIMEOUT, source })??;
        }

        Ok(())
    }

    /// Whether a run is alive; turns false once the run finishes
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Progress over the current contact list, live from the checker cache
    pub fn progress(&self) -> AnalysisProgress {
        self.checker.progress_for(&self.contacts.read())
    }

    /// Final progress of the last run, once it has finished on its own
    pub fn outcome(&self) -> Option<AnalysisProgress> {
        *self.outcome.read()
    }

    /// Cached availability detail for one call, if it has been probed
    pub fn availability(&self, call_uuid: &str) -> Option<AnalysisAvailability> {
        self.checker.availability(call_uuid)
    }
}

/// Ensure the run is cancelled when the scheduler is dropped
impl Drop for AnalysisScheduler {
    fn drop(&mut self) {
        if !self.cancellation_token.is_cancelled() {
            warn!("AnalysisScheduler dropped while running; cancelling");
            self.cancellation_token.cancel();
        }
    }
}
