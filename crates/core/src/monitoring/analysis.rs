//! Post-call analysis availability checking
//!
//! Artifacts appear on the backend some time after a call completes: the
//! transcript and recording as the provider processes them, the analytics
//! summary last. The checker probes availability for every completed
//! contact in bounded concurrent batches, caches what it finds so
//! known-complete calls are never re-probed, and retries a bounded number
//! of rounds for the stragglers.

use std::sync::Arc;
use std::time::Duration;

use calldeck_common::{Probe, Reprobe};
use calldeck_domain::{
    AnalysisAvailability, AnalysisGap, AnalysisProgress, CampaignContact, ContactStatus,
    MonitorConfig, Result,
};
use dashmap::DashMap;
use futures::future::join_all;
use tracing::debug;

use super::ports::AnalysisGateway;

/// Probes and caches analysis availability for completed calls
pub struct AnalysisChecker {
    gateway: Arc<dyn AnalysisGateway>,
    cache: DashMap<String, AnalysisAvailability>,
    batch_size: usize,
    max_retries: u32,
    retry_delay: Duration,
}

impl AnalysisChecker {
    /// Checker with the default monitoring bounds
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self::with_config(gateway, &MonitorConfig::default())
    }

    /// Checker with explicit batch and retry bounds
    pub fn with_config(gateway: Arc<dyn AnalysisGateway>, config: &MonitorConfig) -> Self {
        Self {
            gateway,
            cache: DashMap::new(),
            // chunks() rejects a zero chunk size
            batch_size: config.analysis_batch_size.max(1),
            max_retries: config.analysis_max_retries,
            retry_delay: Duration::from_secs(config.analysis_retry_delay_secs),
        }
    }

    /// One probing pass over the completed contacts.
    ///
    /// Calls already cached as complete are skipped; the rest are probed in
    /// batches of at most the configured size. Returns the aggregate
    /// progress after the pass.
    pub async fn sweep(&self, contacts: &[CampaignContact]) -> AnalysisProgress {
        let pending: Vec<&str> =
            eligible(contacts).filter(|uuid| !self.is_cached_complete(uuid)).collect();

        for batch in pending.chunks(self.batch_size) {
            let probes = batch.iter().map(|uuid| self.probe(uuid));
            for availability in join_all(probes).await {
                self.cache.insert(availability.call_uuid.clone(), availability);
            }
        }

        self.progress_for(contacts)
    }

    /// Sweep repeatedly until every eligible call has full analysis or the
    /// retry budget runs out: one initial pass plus up to the configured
    /// number of retry rounds, with a fixed delay between rounds.
    pub async fn check_until_complete(&self, contacts: &[CampaignContact]) -> AnalysisProgress {
        if eligible(contacts).next().is_none() {
            return AnalysisProgress::default();
        }

        let reprobe = Reprobe::new(self.max_retries, self.retry_delay);
        let outcome = reprobe
            .run(|| async move {
                let progress = self.sweep(contacts).await;
                Probe::when(progress.is_complete(), progress)
            })
            .await;

        match outcome {
            Ok(progress) => progress,
            Err(_) => self.progress_for(contacts),
        }
    }

    /// Aggregate progress from the cache without probing
    pub fn progress_for(&self, contacts: &[CampaignContact]) -> AnalysisProgress {
        let mut total = 0;
        let mut available = 0;
        for uuid in eligible(contacts) {
            total += 1;
            if self.is_cached_complete(uuid) {
                available += 1;
            }
        }
        AnalysisProgress::new(available, total)
    }

    /// Cached availability for one call, if it has been probed
    pub fn availability(&self, call_uuid: &str) -> Option<AnalysisAvailability> {
        self.cache.get(call_uuid).map(|entry| entry.clone())
    }

    /// Drop all cached results, e.g. when switching campaigns
    pub fn clear(&self) {
        self.cache.clear();
    }

    fn is_cached_complete(&self, call_uuid: &str) -> bool {
        self.cache.get(call_uuid).is_some_and(|entry| entry.is_complete())
    }

    async fn probe(&self, call_uuid: &str) -> AnalysisAvailability {
        let mapping = match self.gateway.fetch_mapping(call_uuid).await {
            Ok(mapping) => mapping,
            Err(err) => {
                debug!(call_uuid, error = %err, "call mapping lookup failed");
                return AnalysisAvailability::unavailable(call_uuid, AnalysisGap::MappingError);
            }
        };

        let call_id = match mapping.ultravox_call_id {
            Some(id) => id,
            None => {
                return AnalysisAvailability::unavailable(call_uuid, AnalysisGap::NoMapping);
            }
        };

        let (transcript, recording, summary) = tokio::join!(
            self.gateway.transcript_ready(&call_id),
            self.gateway.recording_ready(&call_id),
            self.gateway.summary_ready(&call_id, call_uuid),
        );

        AnalysisAvailability {
            call_uuid: call_uuid.to_string(),
            transcript: artifact_ready("transcript", call_uuid, transcript),
            recording: artifact_ready("recording", call_uuid, recording),
            summary: artifact_ready("summary", call_uuid, summary),
            ultravox_call_id: Some(call_id),
            gap: None,
        }
    }
}

/// Completed contacts that carry a call UUID are eligible for analysis
fn eligible(contacts: &[CampaignContact]) -> impl Iterator<Item = &str> + '_ {
    contacts
        .iter()
        .filter(|contact| contact.status == ContactStatus::Completed)
        .filter_map(|contact| contact.call_uuid.as_deref())
}

fn artifact_ready(artifact: &str, call_uuid: &str, result: Result<bool>) -> bool {
    match result {
        Ok(ready) => ready,
        Err(err) => {
            debug!(call_uuid, artifact, error = %err, "artifact probe failed");
            false
        }
    }
}
