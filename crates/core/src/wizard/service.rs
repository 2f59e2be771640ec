//! Campaign submission service
//!
//! Drives the two sequential backend calls a wizard run ends with: persist
//! the campaign record, then bulk-insert the selected contacts. When the
//! second call fails for a freshly created campaign, the campaign is
//! deleted again so the backend is not left holding an empty shell.

use std::sync::Arc;

use calldeck_domain::{CallDeckError, Campaign, Result};
use tracing::{debug, error};

use super::ports::CampaignGateway;
use super::state::CampaignSubmission;

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// The backend's projection of the created or updated campaign
    pub campaign: Campaign,
    /// How many contacts the bulk insert accepted
    pub contacts_added: u32,
}

/// Submits completed wizard runs through a [`CampaignGateway`]
pub struct SubmissionService {
    gateway: Arc<dyn CampaignGateway>,
}

impl SubmissionService {
    /// Create a new submission service
    pub fn new(gateway: Arc<dyn CampaignGateway>) -> Self {
        Self { gateway }
    }

    /// Submit a campaign and its contacts.
    ///
    /// Create mode rolls back on partial failure: if the contact insert
    /// fails after the campaign was created, the campaign is deleted and
    /// the insert failure is reported. A rollback failure is reported
    /// alongside the original error, never swallowed. Edit mode updates in
    /// place and performs no rollback.
    pub async fn submit(&self, submission: &CampaignSubmission) -> Result<SubmissionOutcome> {
        let campaign = match submission.campaign_id {
            Some(id) => self.gateway.update_campaign(id, &submission.campaign).await?,
            None => self.gateway.create_campaign(&submission.campaign).await?,
        };
        let created_fresh = submission.campaign_id.is_none();
        debug!(
            campaign_id = campaign.campaign_id,
            contacts = submission.contacts.len(),
            created = created_fresh,
            "campaign record persisted, inserting contacts"
        );

        match self.gateway.add_contacts(campaign.campaign_id, &submission.contacts).await {
            Ok(contacts_added) => Ok(SubmissionOutcome { campaign, contacts_added }),
            Err(insert_err) if created_fresh => {
                error!(
                    campaign_id = campaign.campaign_id,
                    error = %insert_err,
                    "contact insert failed, rolling back created campaign"
                );
                match self.gateway.delete_campaign(campaign.campaign_id).await {
                    Ok(()) => Err(insert_err),
                    Err(rollback_err) => Err(CallDeckError::Backend(format!(
                        "{insert_err}; rollback of campaign {} also failed: {rollback_err}",
                        campaign.campaign_id
                    ))),
                }
            }
            Err(insert_err) => Err(insert_err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use calldeck_domain::{CampaignStatus, NewCampaign, NewContact};

    use super::*;

    #[derive(Default)]
    struct RecordingGateway {
        create_calls: AtomicUsize,
        update_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        contact_calls: AtomicUsize,
        fail_contacts: AtomicBool,
        fail_delete: AtomicBool,
    }

    impl RecordingGateway {
        fn failing_contacts() -> Self {
            let gateway = Self::default();
            gateway.fail_contacts.store(true, Ordering::SeqCst);
            gateway
        }

        fn campaign(id: i64, payload: &NewCampaign) -> Campaign {
            Campaign {
                campaign_id: id,
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
    impl CampaignGateway for RecordingGateway {
        async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Self::campaign(42, campaign))
        }

        async fn update_campaign(
            &self,
            campaign_id: i64,
            campaign: &NewCampaign,
        ) -> Result<Campaign> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Self::campaign(campaign_id, campaign))
        }

        async fn delete_campaign(&self, _campaign_id: i64) -> Result<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_delete.load(Ordering::SeqCst) {
                return Err(CallDeckError::Backend("delete refused".into()));
            }
            Ok(())
        }

        async fn add_contacts(&self, _campaign_id: i64, contacts: &[NewContact]) -> Result<u32> {
            self.contact_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_contacts.load(Ordering::SeqCst) {
                return Err(CallDeckError::Backend("insert refused".into()));
            }
            Ok(contacts.len() as u32)
        }
    }

    fn submission(campaign_id: Option<i64>) -> CampaignSubmission {
        CampaignSubmission {
            campaign_id,
            campaign: NewCampaign {
                campaign_name: "Q3 Outreach".into(),
                assigned_agent_id: "agent-1".into(),
                from_number: "+918879415567".into(),
                total_contacts: 1,
                file_name: None,
                schedule_date: None,
                status: CampaignStatus::Created,
            },
            contacts: vec![NewContact {
                name: "Alice".into(),
                phone: "+919876543210".into(),
                status: calldeck_domain::ContactStatus::Pending,
                additional_data: serde_json::Map::new(),
            }],
        }
    }

    #[tokio::test]
    async fn test_create_then_insert_contacts() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = SubmissionService::new(Arc::clone(&gateway) as Arc<dyn CampaignGateway>);

        let outcome = service.submit(&submission(None)).await.unwrap();

        assert_eq!(outcome.campaign.campaign_id, 42);
        assert_eq!(outcome.contacts_added, 1);
        assert_eq!(gateway.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.contact_calls.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.delete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_edit_mode_updates_in_place() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = SubmissionService::new(Arc::clone(&gateway) as Arc<dyn CampaignGateway>);

        let outcome = service.submit(&submission(Some(7))).await.unwrap();

        assert_eq!(outcome.campaign.campaign_id, 7);
        assert_eq!(gateway.update_calls.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_partial_failure_rolls_back_created_campaign() {
        let gateway = Arc::new(RecordingGateway::failing_contacts());
        let service = SubmissionService::new(Arc::clone(&gateway) as Arc<dyn CampaignGateway>);

        let err = service.submit(&submission(None)).await.unwrap_err();

        // The original insert failure is what the operator sees
        assert!(err.to_string().contains("insert refused"));
        assert_eq!(gateway.delete_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rollback_failure_reported_alongside_original() {
        let gateway = Arc::new(RecordingGateway::failing_contacts());
        gateway.fail_delete.store(true, Ordering::SeqCst);
        let service = SubmissionService::new(Arc::clone(&gateway) as Arc<dyn CampaignGateway>);

        let err = service.submit(&submission(None)).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("insert refused"));
        assert!(message.contains("rollback of campaign 42 also failed"));
        assert!(message.contains("delete refused"));
    }

    #[tokio::test]
    async fn test_edit_mode_failure_skips_rollback() {
        let gateway = Arc::new(RecordingGateway::failing_contacts());
        let service = SubmissionService::new(Arc::clone(&gateway) as Arc<dyn CampaignGateway>);

        let err = service.submit(&submission(Some(7))).await.unwrap_err();

        assert!(err.to_string().contains("insert refused"));
        assert_eq!(gateway.delete_calls.load(Ordering::SeqCst), 0);
    }
}
