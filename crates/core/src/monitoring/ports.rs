//! Port interfaces for campaign monitoring

use async_trait::async_trait;
use calldeck_domain::{
    CallMapping, CallStatusSnapshot, Campaign, CampaignContact, CampaignStats, Result,
};

/// Backend reads the campaign monitor polls on every tick
#[async_trait]
pub trait MonitoringGateway: Send + Sync {
    /// Fetch the campaign record
    async fn fetch_campaign(&self, campaign_id: i64) -> Result<Campaign>;

    /// Fetch aggregated campaign statistics
    async fn fetch_stats(&self, campaign_id: i64) -> Result<CampaignStats>;

    /// Fetch the full contact list
    async fn fetch_contacts(&self, campaign_id: i64) -> Result<Vec<CampaignContact>>;

    /// Fetch live-or-completed status for one call
    async fn fetch_call_status(&self, call_uuid: &str) -> Result<CallStatusSnapshot>;
}

/// Backend reads behind analysis-availability checking.
///
/// Artifact probes answer "does it exist yet", not "fetch it": the monitor
/// only needs readiness, the CLI fetches content on demand.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Resolve the telephony-to-transcription-provider call mapping
    async fn fetch_mapping(&self, call_uuid: &str) -> Result<CallMapping>;

    /// Whether the call transcript exists
    async fn transcript_ready(&self, call_id: &str) -> Result<bool>;

    /// Whether the call recording exists
    async fn recording_ready(&self, call_id: &str) -> Result<bool>;

    /// Whether the analytics summary exists; the analytics endpoint is
    /// keyed by both the provider call id and the telephony call UUID
    async fn summary_ready(&self, call_id: &str, call_uuid: &str) -> Result<bool>;
}
