//! Mock gateway implementations for testing
//!
//! Provides an in-memory mock for the campaign persistence port, enabling
//! deterministic submission tests without a running backend.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use calldeck_core::CampaignGateway;
use calldeck_domain::{
    CallDeckError, Campaign, NewCampaign, NewContact, Result as DomainResult,
};

/// In-memory mock for `CampaignGateway`.
///
/// Records every persistence call and hands out sequential campaign ids.
/// Contact insertion and campaign deletion can each be flipped to fail,
/// which is what the rollback scenarios need.
#[derive(Default, Clone)]
pub struct MockCampaignGateway {
    inner: Arc<GatewayState>,
}

#[derive(Default)]
struct GatewayState {
    next_id: AtomicI64,
    created: Mutex<Vec<NewCampaign>>,
    updated: Mutex<Vec<(i64, NewCampaign)>>,
    contact_batches: Mutex<Vec<(i64, Vec<NewContact>)>>,
    deleted: Mutex<Vec<i64>>,
    fail_contacts: AtomicBool,
    fail_delete: AtomicBool,
}

impl MockCampaignGateway {
    /// Create a fresh mock with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the mock so contact insertion fails with a backend error.
    pub fn refuse_contacts(self) -> Self {
        self.inner.fail_contacts.store(true, Ordering::SeqCst);
        self
    }

    /// Flip the mock so campaign deletion fails with a backend error.
    pub fn refuse_deletes(self) -> Self {
        self.inner.fail_delete.store(true, Ordering::SeqCst);
        self
    }

    /// Creation payloads received so far, in call order.
    pub fn created(&self) -> Vec<NewCampaign> {
        self.inner.created.lock().unwrap().clone()
    }

    /// Update calls received so far as `(campaign_id, payload)` pairs.
    pub fn updated(&self) -> Vec<(i64, NewCampaign)> {
        self.inner.updated.lock().unwrap().clone()
    }

    /// Contact batches received so far as `(campaign_id, contacts)` pairs.
    pub fn contact_batches(&self) -> Vec<(i64, Vec<NewContact>)> {
        self.inner.contact_batches.lock().unwrap().clone()
    }

    /// Campaign ids deletion was attempted for, in call order.
    pub fn deleted(&self) -> Vec<i64> {
        self.inner.deleted.lock().unwrap().clone()
    }

    /// Project a stored payload into the server-owned shape the real
    /// backend would echo back.
    fn reflect(campaign_id: i64, payload: &NewCampaign) -> Campaign {
        Campaign {
            campaign_id,
            campaign_name: payload.campaign_name.clone(),
            assigned_agent_id: payload.assigned_agent_id.clone(),
            assigned_agent_name: None,
            from_number: payload.from_number.clone(),
            status: payload.status,
            total_contacts: payload.total_contacts,
            schedule_date: payload.schedule_date,
            file_name: payload.file_name.clone(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[async_trait]
impl CampaignGateway for MockCampaignGateway {
    async fn create_campaign(&self, campaign: &NewCampaign) -> DomainResult<Campaign> {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.created.lock().unwrap().push(campaign.clone());
        Ok(Self::reflect(id, campaign))
    }

    async fn update_campaign(
        &self,
        campaign_id: i64,
        campaign: &NewCampaign,
    ) -> DomainResult<Campaign> {
        self.inner.updated.lock().unwrap().push((campaign_id, campaign.clone()));
        Ok(Self::reflect(campaign_id, campaign))
    }

    async fn delete_campaign(&self, campaign_id: i64) -> DomainResult<()> {
        self.inner.deleted.lock().unwrap().push(campaign_id);
        if self.inner.fail_delete.load(Ordering::SeqCst) {
            return Err(CallDeckError::Backend("campaign delete refused".into()));
        }
        Ok(())
    }

    async fn add_contacts(
        &self,
        campaign_id: i64,
        contacts: &[NewContact],
    ) -> DomainResult<u32> {
        if self.inner.fail_contacts.load(Ordering::SeqCst) {
            return Err(CallDeckError::Backend("contact insert refused".into()));
        }
        let count = contacts.len() as u32;
        self.inner
            .contact_batches
            .lock()
            .unwrap()
            .push((campaign_id, contacts.to_vec()));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use calldeck_domain::CampaignStatus;

    use super::*;

    #[tokio::test]
    async fn test_mock_hands_out_sequential_ids() {
        // Arrange
        let gateway = MockCampaignGateway::new();

        // Act
        let first = gateway.create_campaign(&payload("first")).await.unwrap();
        let second = gateway.create_campaign(&payload("second")).await.unwrap();

        // Assert
        assert_eq!(first.campaign_id, 1);
        assert_eq!(second.campaign_id, 2);
        assert_eq!(gateway.created().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_refuses_contacts_when_flipped() {
        // Arrange
        let gateway = MockCampaignGateway::new().refuse_contacts();
        let contacts = vec![NewContact {
            name: "Alice".into(),
            phone: "+919876543210".into(),
            status: calldeck_domain::ContactStatus::Pending,
            additional_data: serde_json::Map::new(),
        }];

        // Act
        let result = gateway.add_contacts(1, &contacts).await;

        // Assert - refused batches are not recorded
        assert!(result.is_err());
        assert!(gateway.contact_batches().is_empty());
    }

    // Test helpers
    fn payload(name: &str) -> NewCampaign {
        NewCampaign {
            campaign_name: name.into(),
            assigned_agent_id: "agent-1".into(),
            from_number: "+918879415567".into(),
            total_contacts: 0,
            file_name: None,
            schedule_date: None,
            status: CampaignStatus::Created,
        }
    }
}
