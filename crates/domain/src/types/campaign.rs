//! Campaign projections and submission payloads
//!
//! The backend owns every field here; the client reads these shapes and
//! issues requests, it never mutates them locally.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::status_strings;

/// Campaign lifecycle status.
///
/// `Scheduled` is set at creation time only; the status-update endpoint
/// accepts the other four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Created,
    Scheduled,
    Running,
    Paused,
    Completed,
}

status_strings!(CampaignStatus {
    Created => "created",
    Scheduled => "scheduled",
    Running => "running",
    Paused => "paused",
    Completed => "completed",
});

impl CampaignStatus {
    /// Statuses the `PUT /campaigns/{id}/status` endpoint accepts
    pub fn is_updatable(self) -> bool {
        !matches!(self, Self::Scheduled)
    }
}

/// Server-owned campaign projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: i64,
    pub campaign_name: String,
    pub assigned_agent_id: String,
    #[serde(default)]
    pub assigned_agent_name: Option<String>,
    pub from_number: String,
    pub status: CampaignStatus,
    #[serde(default)]
    pub total_contacts: u32,
    #[serde(default)]
    pub schedule_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Campaign creation/update payload.
///
/// `status` is `Scheduled` when a schedule date is present, `Created`
/// otherwise; optional fields are omitted from the JSON body entirely so
/// partial updates leave the rest untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCampaign {
    pub campaign_name: String,
    pub assigned_agent_id: String,
    pub from_number: String,
    pub total_contacts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<NaiveDateTime>,
    pub status: CampaignStatus,
}

/// Aggregated campaign statistics from `GET /campaigns/{id}/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignStats {
    #[serde(default)]
    pub total_contacts: u32,
    #[serde(default)]
    pub completed_contacts: u32,
    #[serde(default)]
    pub failed_contacts: u32,
    #[serde(default)]
    pub no_answer_contacts: u32,
    #[serde(default)]
    pub pending_contacts: u32,
    #[serde(default)]
    pub calling_contacts: u32,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default)]
    pub total_calls: u32,
    #[serde(default)]
    pub average_call_duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&CampaignStatus::Scheduled).unwrap(), "\"scheduled\"");
        assert_eq!(
            serde_json::from_str::<CampaignStatus>("\"paused\"").unwrap(),
            CampaignStatus::Paused
        );
    }

    #[test]
    fn test_scheduled_not_updatable() {
        assert!(!CampaignStatus::Scheduled.is_updatable());
        assert!(CampaignStatus::Created.is_updatable());
        assert!(CampaignStatus::Running.is_updatable());
        assert!(CampaignStatus::Paused.is_updatable());
        assert!(CampaignStatus::Completed.is_updatable());
    }

    #[test]
    fn test_new_campaign_omits_unset_fields() {
        let payload = NewCampaign {
            campaign_name: "Q3 Outreach".into(),
            assigned_agent_id: "agent-1".into(),
            from_number: "+918879415567".into(),
            total_contacts: 12,
            file_name: None,
            schedule_date: None,
            status: CampaignStatus::Created,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("schedule_date").is_none());
        assert!(json.get("file_name").is_none());
        assert_eq!(json["status"], "created");
    }

    #[test]
    fn test_new_campaign_schedule_date_format() {
        let when = NaiveDateTime::parse_from_str("2026-09-01T14:30:00", "%Y-%m-%dT%H:%M:%S")
            .unwrap();
        let payload = NewCampaign {
            campaign_name: "Scheduled".into(),
            assigned_agent_id: "agent-1".into(),
            from_number: "+918879415567".into(),
            total_contacts: 1,
            file_name: Some("leads.csv".into()),
            schedule_date: Some(when),
            status: CampaignStatus::Scheduled,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["schedule_date"], "2026-09-01T14:30:00");
        assert_eq!(json["status"], "scheduled");
    }
}
