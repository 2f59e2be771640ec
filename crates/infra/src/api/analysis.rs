//! Post-call analysis endpoint adapter
//!
//! The analysis checker only needs to know whether each artifact exists
//! yet, so the probes collapse "missing" responses (404 or an error
//! envelope) into `Ok(false)` and propagate everything else.

use async_trait::async_trait;
use calldeck_core::monitoring::AnalysisGateway;
use calldeck_domain::{CallMapping, Result};
use serde::Deserialize;
use tracing::instrument;

use super::client::ApiClient;
use super::envelope::Empty;

/// HTTP adapter for the analysis sub-resources
#[derive(Clone)]
pub struct AnalysisApi {
    client: ApiClient,
}

#[derive(Debug, Deserialize)]
struct MappingPayload {
    mapping: CallMapping,
}

impl AnalysisApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn artifact_ready(&self, path: &str) -> Result<bool> {
        match self.client.get::<Empty>(path).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_unavailable() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl AnalysisGateway for AnalysisApi {
    #[instrument(skip(self))]
    async fn fetch_mapping(&self, call_uuid: &str) -> Result<CallMapping> {
        let payload: MappingPayload =
            self.client.get(&format!("/call_mapping/{call_uuid}")).await?;
        Ok(payload.mapping)
    }

    #[instrument(skip(self))]
    async fn transcript_ready(&self, call_id: &str) -> Result<bool> {
        self.artifact_ready(&format!("/call_transcription/{call_id}")).await
    }

    #[instrument(skip(self))]
    async fn recording_ready(&self, call_id: &str) -> Result<bool> {
        self.artifact_ready(&format!("/call_recording/{call_id}")).await
    }

    #[instrument(skip(self))]
    async fn summary_ready(&self, call_id: &str, call_uuid: &str) -> Result<bool> {
        self.artifact_ready(&format!("/call_analytics/{call_id}/{call_uuid}")).await
    }
}
