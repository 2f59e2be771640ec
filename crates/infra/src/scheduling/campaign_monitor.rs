//! Interval-driven campaign monitor
//!
//! Polls the backend for one campaign: statistics and the full contact list
//! on a fixed cadence, narrowed to per-call live details while any contact
//! is mid-call. Every tick runs under a [`PollGate`] generation so a slow
//! in-flight response can never overwrite fresher state, and poll errors are
//! recorded on the snapshot without stopping the loop.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use calldeck_core::monitoring::{MonitoringGateway, PollGate, RefreshPlan};
use calldeck_domain::{
    CallDeckError, CallStatusSnapshot, Campaign, CampaignContact, CampaignStats, ContactStatus,
    LiveCallDetails, MonitorConfig, Result,
};
use futures::future::join_all;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};
use crate::scheduling::{JOIN_TIMEOUT, TaskHandle};

/// Configuration for the campaign monitor
#[derive(Debug, Clone)]
pub struct CampaignMonitorConfig {
    /// Delay between poll ticks
    pub poll_interval: Duration,
}

impl Default for CampaignMonitorConfig {
    fn default() -> Self {
        Self::from(&MonitorConfig::default())
    }
}

impl From<&MonitorConfig> for CampaignMonitorConfig {
    fn from(config: &MonitorConfig) -> Self {
        Self { poll_interval: Duration::from_secs(config.poll_interval_secs) }
    }
}

/// Everything the monitor has observed about one campaign.
///
/// `live_calls` carries per-call detail for contacts currently mid-call,
/// keyed by call UUID; entries are dropped as soon as a full refresh shows
/// the call has left the `calling` state. `loaded` flips on the first
/// successful refresh and never flips back.
#[derive(Debug, Clone, Default)]
pub struct CampaignSnapshot {
    pub campaign: Option<Campaign>,
    pub stats: Option<CampaignStats>,
    pub contacts: Vec<CampaignContact>,
    pub live_calls: HashMap<String, LiveCallDetails>,
    pub loaded: bool,
    pub last_error: Option<String>,
}

impl CampaignSnapshot {
    /// Live call detail for a contact currently mid-call
    pub fn live_detail(&self, call_uuid: &str) -> Option<&LiveCallDetails> {
        self.live_calls.get(call_uuid)
    }
}

/// Context for the poll loop to avoid too many arguments (clippy)
struct PollContext {
    gateway: Arc<dyn MonitoringGateway>,
    campaign_id: i64,
    snapshot: Arc<RwLock<CampaignSnapshot>>,
    gate: Arc<PollGate>,
}

/// Background poller for one campaign
pub struct CampaignMonitor {
    gateway: Arc<dyn MonitoringGateway>,
    campaign_id: i64,
    config: CampaignMonitorConfig,
    snapshot: Arc<RwLock<CampaignSnapshot>>,
    gate: Arc<PollGate>,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl CampaignMonitor {
    /// Monitor with the default poll interval
    pub fn new(gateway: Arc<dyn MonitoringGateway>, campaign_id: i64) -> Self {
        Self::with_config(gateway, campaign_id, CampaignMonitorConfig::default())
    }

    /// Monitor with an explicit poll interval
    pub fn with_config(
        gateway: Arc<dyn MonitoringGateway>,
        campaign_id: i64,
        config: CampaignMonitorConfig,
    ) -> Self {
        Self {
            gateway,
            campaign_id,
            config,
            snapshot: Arc::new(RwLock::new(CampaignSnapshot::default())),
            gate: Arc::new(PollGate::new()),
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start polling.
    ///
    /// The first refresh runs immediately, then on the configured interval.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::AlreadyRunning`] if the monitor is already
    /// running.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        info!(campaign_id = self.campaign_id, "starting campaign monitor");

        // The previous token is spent if this is a restart
        self.cancellation_token = CancellationToken::new();

        let context = PollContext {
            gateway: Arc::clone(&self.gateway),
            campaign_id: self.campaign_id,
            snapshot: Arc::clone(&self.snapshot),
            gate: Arc::clone(&self.gate),
        };
        let config = self.config.clone();
        let cancel = self.cancellation_token.clone();

        let handle = tokio::spawn(async move {
            Self::poll_loop(context, config, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        Ok(())
    }

    /// Stop polling.
    ///
    /// Cancels the background task, invalidates outstanding poll
    /// generations, and awaits the task with a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NotRunning`] if the monitor is not running,
    /// or a timeout/join error if the task fails to wind down.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        info!(campaign_id = self.campaign_id, "stopping campaign monitor");

        self.cancellation_token.cancel();
        // Responses racing the stop must not land in the snapshot
        self.gate.invalidate();

        if let Some(handle) = self.task_handle.lock().await.take() {
            tokio::time::timeout(JOIN_TIMEOUT, handle)
                .await
                .map_err(|source| SchedulerError::Timeout { duration: JOIN_TIMEOUT, source })??;
        }

        Ok(())
    }

    /// Whether the background task is alive
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> CampaignSnapshot {
        self.snapshot.read().clone()
    }

    /// Campaign this monitor polls
    pub fn campaign_id(&self) -> i64 {
        self.campaign_id
    }

    async fn poll_loop(
        context: PollContext,
        config: CampaignMonitorConfig,
        cancel: CancellationToken,
    ) {
        let mut ticker = tokio::time::interval(config.poll_interval);
        // A slow poll must not be followed by a burst of catch-up ticks
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(campaign_id = context.campaign_id, "campaign poll loop cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    Self::poll_tick(&context).await;
                }
            }
        }
    }

    /// One poll tick: a full refresh, or live-call lookups narrowed to the
    /// contacts currently mid-call
    async fn poll_tick(context: &PollContext) {
        let generation = context.gate.begin();

        let plan = {
            let guard = context.snapshot.read();
            RefreshPlan::for_contacts(&guard.contacts)
        };

        match plan {
            RefreshPlan::Full => Self::full_refresh(context, generation).await,
            RefreshPlan::Partial(calls) => {
                if Self::partial_refresh(context, generation, &calls).await {
                    // A watched call reached a terminal state; pick the
                    // final statuses up from the backend in the same tick
                    Self::full_refresh(context, generation).await;
                }
            }
        }
    }

    /// Re-fetch the campaign record, statistics, and the whole contact list
    async fn full_refresh(context: &PollContext, generation: u64) {
        let fetched = Self::fetch_all(context).await;

        if !context.gate.is_current(generation) {
            debug!(generation, "dropping stale campaign refresh");
            return;
        }

        let mut guard = context.snapshot.write();
        match fetched {
            Ok((campaign, stats, contacts)) => {
                let calling: HashSet<String> = contacts
                    .iter()
                    .filter(|contact| contact.status == ContactStatus::Calling)
                    .filter_map(|contact| contact.call_uuid.clone())
                    .collect();

                // Live details for calls that have since ended no longer apply
                guard.live_calls.retain(|uuid, _| calling.contains(uuid));
                guard.campaign = Some(campaign);
                guard.stats = Some(stats);
                guard.contacts = contacts;
                guard.loaded = true;
                guard.last_error = None;
            }
            Err(err) => {
                warn!(campaign_id = context.campaign_id, error = %err, "campaign refresh failed");
                guard.last_error = Some(err.to_string());
            }
        }
    }

    async fn fetch_all(
        context: &PollContext,
    ) -> Result<(Campaign, CampaignStats, Vec<CampaignContact>)> {
        let (campaign, stats, contacts) = tokio::join!(
            context.gateway.fetch_campaign(context.campaign_id),
            context.gateway.fetch_stats(context.campaign_id),
            context.gateway.fetch_contacts(context.campaign_id),
        );
        Ok((campaign?, stats?, contacts?))
    }

    /// Look up live details for the mid-call subset only.
    ///
    /// Returns `true` when any watched call has left the live state, which
    /// asks the caller for a full refresh.
    async fn partial_refresh(
        context: &PollContext,
        generation: u64,
        calls: &[(i64, String)],
    ) -> bool {
        let probes = calls.iter().map(|(_, uuid)| context.gateway.fetch_call_status(uuid));
        let results = join_all(probes).await;

        if !context.gate.is_current(generation) {
            debug!(generation, "dropping stale live-call responses");
            return false;
        }

        let mut ended = false;
        let mut first_error: Option<String> = None;

        let mut guard = context.snapshot.write();
        for ((_, uuid), result) in calls.iter().zip(results) {
            match result {
                Ok(CallStatusSnapshot::Live(details)) => {
                    guard.live_calls.insert(uuid.clone(), details);
                }
                Ok(CallStatusSnapshot::Completed(_)) => {
                    guard.live_calls.remove(uuid);
                    ended = true;
                }
                // The backend drops the live record once the call lands
                Err(CallDeckError::NotFound(_)) => {
                    guard.live_calls.remove(uuid);
                    ended = true;
                }
                Err(err) => {
                    warn!(call_uuid = %uuid, error = %err, "live call lookup failed");
                    if first_error.is_none() {
                        first_error = Some(err.to_string());
                    }
                }
            }
        }
        guard.last_error = first_error;

        ended
    }
}

/// Ensure the poll loop is cancelled when the monitor is dropped
impl Drop for CampaignMonitor {
    fn drop(&mut self) {
        // Can't await the task handle here; cancelling the token is
        // best-effort cleanup
        if !self.cancellation_token.is_cancelled() {
            warn!(
                campaign_id = self.campaign_id,
                "CampaignMonitor dropped while running; cancelling"
            );
            self.cancellation_token.cancel();
        }
    }
}
