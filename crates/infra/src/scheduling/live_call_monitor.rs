//! Live watch for a single outbound call
//!
//! Polls `GET /call_status/{uuid}` on a 1 second cadence and keeps the most
//! recent observation. The watch ends itself the moment the backend reports
//! the call completed; poll errors are recorded and the watch keeps going.

use std::sync::Arc;
use std::time::Duration;

use calldeck_core::monitoring::MonitoringGateway;
use calldeck_domain::{CallStatusSnapshot, MonitorConfig};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};
use crate::scheduling::{JOIN_TIMEOUT, TaskHandle};

/// Latest observation of the watched call
#[derive(Debug, Default)]
struct WatchState {
    latest: Option<CallStatusSnapshot>,
    last_error: Option<String>,
}

/// Background watcher for one in-flight call
pub struct LiveCallMonitor {
    gateway: Arc<dyn MonitoringGateway>,
    call_uuid: String,
    poll_interval: Duration,
    state: Arc<RwLock<WatchState>>,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl LiveCallMonitor {
    /// Watcher with the default 1 second cadence
    pub fn new(gateway: Arc<dyn MonitoringGateway>, call_uuid: impl Into<String>) -> Self {
        let interval = Duration::from_secs(MonitorConfig::default().live_poll_interval_secs);
        Self::with_interval(gateway, call_uuid, interval)
    }

    /// Watcher with an explicit poll cadence
    pub fn with_interval(
        gateway: Arc<dyn MonitoringGateway>,
        call_uuid: impl Into<String>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            gateway,
            call_uuid: call_uuid.into(),
            poll_interval,
            state: Arc::new(RwLock::new(WatchState::default())),
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start watching.
    ///
    /// The first status lookup runs immediately, then on the configured
    /// cadence until the call completes or the watch is stopped.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::AlreadyRunning`] if the watch is already
    /// running.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        info!(call_uuid = %self.call_uuid, "starting live call watch");

        // The previous token is spent if this is a restart
        self.cancellation_token = CancellationToken::new();

        let gateway = Arc::clone(&self.gateway);
        let call_uuid = self.call_uuid.clone();
        let state = Arc::clone(&self.state);
        let poll_interval = self.poll_interval;
        let cancel = self.cancellation_token.clone();

        let handle = tokio::spawn(async move {
            Self::watch_loop(gateway, call_uuid, state, poll_interval, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        Ok(())
    }

    /// Stop watching before the call completes.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NotRunning`] if the watch is not running
    /// (including after it ended itself on completion), or a timeout/join
    /// error if the task fails to wind down.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        info!(call_uuid = %self.call_uuid, "stopping live call watch");

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            tokio::time::timeout(JOIN_TIMEOUT, handle)
                .await
                .map_err(|source| SchedulerError::Timeout { duration: JOIN_TIMEOUT, source })??;
        }

        Ok(())
    }

    /// Whether the watch task is alive; turns false once the call completes
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Most recent status observation, if any poll has succeeded
    pub fn latest(&self) -> Option<CallStatusSnapshot> {
        self.state.read().latest.clone()
    }

    /// Message from the most recent failed poll, cleared on success
    pub fn last_error(&self) -> Option<String> {
        self.state.read().last_error.clone()
    }

    /// Call this watcher observes
    pub fn call_uuid(&self) -> &str {
        &self.call_uuid
    }

    async fn watch_loop(
        gateway: Arc<dyn MonitoringGateway>,
        call_uuid: String,
        state: Arc<RwLock<WatchState>>,
        poll_interval: Duration,
        cancel: CancellationToken,
    ) {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(call_uuid = %call_uuid, "live call watch cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    match gateway.fetch_call_status(&call_uuid).await {
                        Ok(snapshot) => {
                            let ended = !snapshot.is_live();
                            let mut guard = state.write();
                            guard.latest = Some(snapshot);
                            guard.last_error = None;
                            drop(guard);

                            if ended {
                                info!(call_uuid = %call_uuid, "call completed; watch finished");
                                break;
                            }
                        }
                        Err(err) => {
                            warn!(call_uuid = %call_uuid, error = %err, "call status poll failed");
                            state.write().last_error = Some(err.to_string());
                        }
                    }
                }
            }
        }

        // Retire the token on natural completion too, so drop stays quiet
        cancel.cancel();
    }
}

/// Ensure the watch is cancelled when the monitor is dropped
impl Drop for LiveCallMonitor {
    fn drop(&mut self) {
        if !self.cancellation_token.is_cancelled() {
            warn!(call_uuid = %self.call_uuid, "LiveCallMonitor dropped while running; cancelling");
            self.cancellation_token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use calldeck_common::wait_until;
    use calldeck_domain::{
        CallDeckError, Campaign, CampaignContact, CampaignStats, CompletedCallDetails,
        LiveCallDetails, LiveCallState, Result,
    };

    use super::*;

    /// Gateway scripted for the status endpoint only; the live watch never
    /// touches campaign reads
    #[derive(Default)]
    struct ScriptedCallStatus {
        /// Number of polls that observe the call still live
        live_polls: usize,
        always_fail: bool,
        polls: AtomicUsize,
    }

    #[async_trait]
    impl MonitoringGateway for ScriptedCallStatus {
        async fn fetch_campaign(&self, _campaign_id: i64) -> Result<Campaign> {
            Err(CallDeckError::Internal("not scripted".into()))
        }

        async fn fetch_stats(&self, _campaign_id: i64) -> Result<CampaignStats> {
            Err(CallDeckError::Internal("not scripted".into()))
        }

        async fn fetch_contacts(&self, _campaign_id: i64) -> Result<Vec<CampaignContact>> {
            Err(CallDeckError::Internal("not scripted".into()))
        }

        async fn fetch_call_status(&self, call_uuid: &str) -> Result<CallStatusSnapshot> {
            let poll = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.always_fail {
                return Err(CallDeckError::Backend("status endpoint unavailable".into()));
            }
            if poll <= self.live_polls {
                Ok(CallStatusSnapshot::Live(LiveCallDetails {
                    call_status: Some(LiveCallState::InProgress),
                    call_uuid: Some(call_uuid.to_string()),
                    ..LiveCallDetails::default()
                }))
            } else {
                Ok(CallStatusSnapshot::Completed(CompletedCallDetails {
                    call_uuid: Some(call_uuid.to_string()),
                    call_duration: Some(42),
                    ..CompletedCallDetails::default()
                }))
            }
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_start_stop_round_trip() {
        let gateway = Arc::new(ScriptedCallStatus {
            live_polls: usize::MAX,
            ..ScriptedCallStatus::default()
        });
        let mut monitor = LiveCallMonitor::with_interval(
            Arc::clone(&gateway) as Arc<dyn MonitoringGateway>,
            "uuid-1",
            Duration::from_millis(10),
        );

        assert!(!monitor.is_running());

        monitor.start().await.unwrap();
        assert!(monitor.is_running());

        monitor.stop().await.unwrap();
        assert!(!monitor.is_running());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_second_start_is_rejected() {
        let gateway = Arc::new(ScriptedCallStatus {
            live_polls: usize::MAX,
            ..ScriptedCallStatus::default()
        });
        let mut monitor = LiveCallMonitor::with_interval(
            Arc::clone(&gateway) as Arc<dyn MonitoringGateway>,
            "uuid-1",
            Duration::from_millis(10),
        );

        monitor.start().await.unwrap();

        let result = monitor.start().await;
        assert!(matches!(result, Err(SchedulerError::AlreadyRunning)));

        monitor.stop().await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_watch_ends_when_call_completes() {
        let gateway =
            Arc::new(ScriptedCallStatus { live_polls: 2, ..ScriptedCallStatus::default() });
        let mut monitor = LiveCallMonitor::with_interval(
            Arc::clone(&gateway) as Arc<dyn MonitoringGateway>,
            "uuid-1",
            Duration::from_millis(10),
        );

        monitor.start().await.unwrap();
        wait_until!(Duration::from_secs(2), !monitor.is_running());

        assert!(matches!(monitor.latest(), Some(CallStatusSnapshot::Completed(_))));
        assert_eq!(gateway.polls.load(Ordering::SeqCst), 3);

        // The watch already wound itself down
        let result = monitor.stop().await;
        assert!(matches!(result, Err(SchedulerError::NotRunning)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_poll_error_keeps_watching() {
        let gateway =
            Arc::new(ScriptedCallStatus { always_fail: true, ..ScriptedCallStatus::default() });
        let mut monitor = LiveCallMonitor::with_interval(
            Arc::clone(&gateway) as Arc<dyn MonitoringGateway>,
            "uuid-1",
            Duration::from_millis(10),
        );

        monitor.start().await.unwrap();
        wait_until!(Duration::from_secs(2), monitor.last_error().is_some());

        assert!(monitor.is_running(), "errors must not end the watch");
        assert!(monitor.latest().is_none());

        monitor.stop().await.unwrap();
    }
}
