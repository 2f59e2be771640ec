//! Port interfaces for campaign submission

use async_trait::async_trait;
use calldeck_domain::{Campaign, NewCampaign, NewContact, Result};

/// Backend operations the wizard needs to persist a campaign.
///
/// Implemented over HTTP in the infra crate; tests use in-memory mocks.
#[async_trait]
pub trait CampaignGateway: Send + Sync {
    /// Create a campaign record, returning the backend's projection of it
    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign>;

    /// Update an existing campaign record
    async fn update_campaign(&self, campaign_id: i64, campaign: &NewCampaign) -> Result<Campaign>;

    /// Delete a campaign record
    async fn delete_campaign(&self, campaign_id: i64) -> Result<()>;

    /// Bulk-insert contacts into a campaign, returning how many were added
    async fn add_contacts(&self, campaign_id: i64, contacts: &[NewContact]) -> Result<u32>;
}
