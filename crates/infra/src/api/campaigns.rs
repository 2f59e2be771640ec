//! Campaign endpoint adapter
//!
//! Covers the campaign lifecycle (list/create/update/delete/status), the
//! contact bulk-insert, and the per-campaign reads the monitor polls. One
//! type implements both the wizard's [`CampaignGateway`] and the monitor's
//! [`MonitoringGateway`] since they share the same resource.

use async_trait::async_trait;
use calldeck_core::monitoring::MonitoringGateway;
use calldeck_core::wizard::CampaignGateway;
use calldeck_domain::{
    CallStatusSnapshot, Campaign, CampaignContact, CampaignStats, CampaignStatus, NewCampaign,
    NewContact, Result,
};
use serde::Deserialize;
use tracing::instrument;

use super::client::ApiClient;
use super::envelope::Empty;
use super::errors::ApiError;

/// HTTP adapter for the `/campaigns` resource
#[derive(Clone)]
pub struct CampaignsApi {
    client: ApiClient,
}

#[derive(Debug, Deserialize)]
struct CampaignsPayload {
    campaigns: Vec<Campaign>,
}

#[derive(Debug, Deserialize)]
struct CampaignPayload {
    campaign: Campaign,
}

#[derive(Debug, Deserialize)]
struct ContactsPayload {
    contacts: Vec<CampaignContact>,
}

#[derive(Debug, Deserialize)]
struct ContactsAddedPayload {
    contacts_added: u32,
}

#[derive(Debug, Deserialize)]
struct StatsPayload {
    stats: CampaignStats,
}

impl CampaignsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List every campaign
    #[instrument(skip(self))]
    pub async fn list(&self) -> std::result::Result<Vec<Campaign>, ApiError> {
        let payload: CampaignsPayload = self.client.get("/campaigns").await?;
        Ok(payload.campaigns)
    }

    /// Fetch one campaign by id
    #[instrument(skip(self))]
    pub async fn get(&self, campaign_id: i64) -> std::result::Result<Campaign, ApiError> {
        let payload: CampaignPayload =
            self.client.get(&format!("/campaigns/{campaign_id}")).await?;
        Ok(payload.campaign)
    }

    /// Create a campaign; the backend answers 201 with its projection
    #[instrument(skip(self, campaign), fields(name = %campaign.campaign_name))]
    pub async fn create(&self, campaign: &NewCampaign) -> std::result::Result<Campaign, ApiError> {
        let payload: CampaignPayload = self.client.post("/campaigns", campaign).await?;
        Ok(payload.campaign)
    }

    /// Update an existing campaign in place
    #[instrument(skip(self, campaign), fields(name = %campaign.campaign_name))]
    pub async fn update(
        &self,
        campaign_id: i64,
        campaign: &NewCampaign,
    ) -> std::result::Result<Campaign, ApiError> {
        let payload: CampaignPayload =
            self.client.put(&format!("/campaigns/{campaign_id}"), campaign).await?;
        Ok(payload.campaign)
    }

    /// Delete a campaign and its contacts
    #[instrument(skip(self))]
    pub async fn delete(&self, campaign_id: i64) -> std::result::Result<(), ApiError> {
        let _: Empty = self.client.delete(&format!("/campaigns/{campaign_id}")).await?;
        Ok(())
    }

    /// Change a campaign's lifecycle status.
    ///
    /// `scheduled` is set at creation time only, so it is rejected here
    /// before any request goes out.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        campaign_id: i64,
        status: CampaignStatus,
    ) -> std::result::Result<(), ApiError> {
        if !status.is_updatable() {
            return Err(ApiError::Client(format!(
                "campaign status '{status}' can only be set at creation"
            )));
        }

        let body = serde_json::json!({ "status": status });
        let _: Empty =
            self.client.put(&format!("/campaigns/{campaign_id}/status"), &body).await?;
        Ok(())
    }

    /// Fetch the campaign's full contact list
    #[instrument(skip(self))]
    pub async fn contacts(
        &self,
        campaign_id: i64,
    ) -> std::result::Result<Vec<CampaignContact>, ApiError> {
        let payload: ContactsPayload =
            self.client.get(&format!("/campaigns/{campaign_id}/contacts")).await?;
        Ok(payload.contacts)
    }

    /// Bulk-insert contacts, returning how many the backend accepted
    #[instrument(skip(self, contacts), fields(count = contacts.len()))]
    pub async fn add_contacts(
        &self,
        campaign_id: i64,
        contacts: &[NewContact],
    ) -> std::result::Result<u32, ApiError> {
        let body = serde_json::json!({ "contacts": contacts });
        let payload: ContactsAddedPayload =
            self.client.post(&format!("/campaigns/{campaign_id}/contacts"), &body).await?;
        Ok(payload.contacts_added)
    }

    /// Fetch aggregated statistics for a campaign
    #[instrument(skip(self))]
    pub async fn stats(&self, campaign_id: i64) -> std::result::Result<CampaignStats, ApiError> {
        let payload: StatsPayload =
            self.client.get(&format!("/campaigns/{campaign_id}/stats")).await?;
        Ok(payload.stats)
    }
}

#[async_trait]
impl CampaignGateway for CampaignsApi {
    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign> {
        Ok(self.create(campaign).await?)
    }

    async fn update_campaign(&self, campaign_id: i64, campaign: &NewCampaign) -> Result<Campaign> {
        Ok(self.update(campaign_id, campaign).await?)
    }

    async fn delete_campaign(&self, campaign_id: i64) -> Result<()> {
        Ok(self.delete(campaign_id).await?)
    }

    async fn add_contacts(&self, campaign_id: i64, contacts: &[NewContact]) -> Result<u32> {
        Ok(CampaignsApi::add_contacts(self, campaign_id, contacts).await?)
    }
}

#[async_trait]
impl MonitoringGateway for CampaignsApi {
    async fn fetch_campaign(&self, campaign_id: i64) -> Result<Campaign> {
        Ok(self.get(campaign_id).await?)
    }

    async fn fetch_stats(&self, campaign_id: i64) -> Result<CampaignStats> {
        Ok(self.stats(campaign_id).await?)
    }

    async fn fetch_contacts(&self, campaign_id: i64) -> Result<Vec<CampaignContact>> {
        Ok(self.contacts(campaign_id).await?)
    }

    async fn fetch_call_status(&self, call_uuid: &str) -> Result<CallStatusSnapshot> {
        let snapshot: CallStatusSnapshot =
            self.client.get(&format!("/call_status/{call_uuid}")).await?;
        Ok(snapshot)
    }
}
