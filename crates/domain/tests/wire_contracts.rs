//! Integration tests for backend wire contracts
//!
//! Each test decodes a realistic backend response body (post-envelope) and
//! checks that the typed projections pick up every field the console renders.

use calldeck_domain::types::{
    Agent, AnalysisGap, AnalysisProgress, Campaign, CampaignContact, CampaignStats,
    CampaignStatus, CallMapping, CallStatusSnapshot, ContactStatus, NewCampaign, NewContact,
    NumberType, RecentCallsPage, SavedPhoneNumber,
};

// ============================================================================
// Campaign Listing and Detail
// ============================================================================

/// Scenario: campaign listing returns a mix of fresh and finished campaigns
#[test]
fn test_campaign_listing_decodes_all_statuses() {
    let json = serde_json::json!([
        {
            "campaign_id": 1,
            "campaign_name": "Q3 Outreach",
            "assigned_agent_id": "agent-1",
            "assigned_agent_name": "Sales Bot",
            "from_number": "+918879415567",
            "status": "running",
            "total_contacts": 40,
            "schedule_date": null,
            "file_name": "leads.csv",
            "created_at": "2026-08-20T09:00:00",
            "updated_at": "2026-08-23T10:15:00"
        },
        {
            "campaign_id": 2,
            "campaign_name": "Diwali Promo",
            "assigned_agent_id": "agent-2",
            "from_number": "+918879415568",
            "status": "scheduled",
            "schedule_date": "2026-10-15T10:00:00"
        }
    ]);

    let campaigns: Vec<Campaign> = serde_json::from_value(json).expect("listing should decode");
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].status, CampaignStatus::Running);
    assert_eq!(campaigns[0].total_contacts, 40);
    assert_eq!(campaigns[1].status, CampaignStatus::Scheduled);
    assert!(campaigns[1].schedule_date.is_some());
    assert!(campaigns[1].assigned_agent_name.is_none());
}

/// Scenario: campaign detail arrives together with its statistics block
#[test]
fn test_campaign_detail_with_statistics() {
    let campaign_json = serde_json::json!({
        "campaign_id": 7,
        "campaign_name": "Renewals",
        "assigned_agent_id": "agent-1",
        "assigned_agent_name": "Sales Bot",
        "from_number": "+918879415567",
        "status": "completed",
        "total_contacts": 10,
        "file_name": "renewals.xlsx"
    });
    let stats_json = serde_json::json!({
        "total_contacts": 10,
        "completed_contacts": 7,
        "failed_contacts": 1,
        "no_answer_contacts": 2,
        "pending_contacts": 0,
        "calling_contacts": 0,
        "completion_rate": 100.0,
        "success_rate": 70.0,
        "total_calls": 10,
        "average_call_duration": 42.5
    });

    let campaign: Campaign = serde_json::from_value(campaign_json).expect("campaign decodes");
    let stats: CampaignStats = serde_json::from_value(stats_json).expect("stats decode");

    assert_eq!(campaign.status, CampaignStatus::Completed);
    assert_eq!(stats.completed_contacts + stats.failed_contacts + stats.no_answer_contacts, 10);
    assert!((stats.success_rate - 70.0).abs() < f64::EPSILON);
}

/// Scenario: creation payload for an immediate campaign vs a scheduled one
#[test]
fn test_campaign_creation_payload_shapes() {
    let immediate = NewCampaign {
        campaign_name: "Immediate".into(),
        assigned_agent_id: "agent-1".into(),
        from_number: "+918879415567".into(),
        total_contacts: 3,
        file_name: Some("leads.csv".into()),
        schedule_date: None,
        status: CampaignStatus::Created,
    };
    let body = serde_json::to_value(&immediate).expect("payload serializes");
    assert_eq!(body["status"], "created");
    assert!(body.get("schedule_date").is_none(), "unset schedule must be absent");

    let scheduled: NewCampaign = serde_json::from_value(serde_json::json!({
        "campaign_name": "Later",
        "assigned_agent_id": "agent-2",
        "from_number": "+918879415568",
        "total_contacts": 5,
        "schedule_date": "2026-09-10T09:30:00",
        "status": "scheduled"
    }))
    .expect("scheduled payload decodes");
    assert_eq!(scheduled.status, CampaignStatus::Scheduled);
}

// ============================================================================
// Campaign Contacts
// ============================================================================

/// Scenario: contact listing mid-campaign carries every status plus call UUIDs
#[test]
fn test_contact_listing_mid_campaign() {
    let json = serde_json::json!([
        {
            "id": 1,
            "campaign_id": 7,
            "name": "Alice",
            "phone": "+919876543210",
            "status": "completed",
            "call_uuid": "uuid-1",
            "additional_data": {"City": "Pune"},
            "created_at": "2026-08-23T09:00:00",
            "updated_at": "2026-08-23T09:05:00"
        },
        {
            "id": 2,
            "campaign_id": 7,
            "name": "Bob",
            "phone": "+919123456789",
            "status": "calling",
            "call_uuid": "uuid-2"
        },
        {
            "id": 3,
            "campaign_id": 7,
            "name": null,
            "phone": "+919111222333",
            "status": "no-answer"
        },
        {
            "id": 4,
            "campaign_id": 7,
            "name": "Dana",
            "phone": "+919444555666",
            "status": "pending"
        }
    ]);

    let contacts: Vec<CampaignContact> =
        serde_json::from_value(json).expect("contact listing decodes");
    assert_eq!(contacts.len(), 4);
    assert_eq!(contacts[0].status, ContactStatus::Completed);
    assert_eq!(contacts[1].status, ContactStatus::Calling);
    assert_eq!(contacts[2].status, ContactStatus::NoAnswer);
    assert!(contacts[2].name.is_none());
    assert_eq!(contacts[3].call_uuid, None);

    let in_flight: Vec<i64> = contacts
        .iter()
        .filter(|c| c.status == ContactStatus::Calling)
        .map(|c| c.id)
        .collect();
    assert_eq!(in_flight, vec![2]);
}

/// Scenario: upload payload keeps the source row under `additional_data`
#[test]
fn test_contact_upload_payload() {
    let contacts = vec![NewContact {
        name: "Alice".into(),
        phone: "+919876543210".into(),
        status: ContactStatus::Pending,
        additional_data: serde_json::json!({"Name": "Alice", "Phone": "9876543210"})
            .as_object()
            .cloned()
            .expect("object literal"),
    }];

    let body = serde_json::to_value(&contacts).expect("upload payload serializes");
    assert_eq!(body[0]["status"], "pending");
    assert_eq!(body[0]["additional_data"]["Phone"], "9876543210");
}

// ============================================================================
// Call Status and Recent Calls
// ============================================================================

/// Scenario: a call is observed live, then completed on a later poll
#[test]
fn test_call_status_live_then_completed() {
    let live: CallStatusSnapshot = serde_json::from_value(serde_json::json!({
        "call_status": "live",
        "details": {
            "direction": "outbound",
            "from": "+918879415567",
            "to": "+919876543210",
            "call_status": "ringing",
            "call_uuid": "uuid-77"
        }
    }))
    .expect("live snapshot decodes");
    assert!(live.is_live());

    let completed: CallStatusSnapshot = serde_json::from_value(serde_json::json!({
        "call_status": "completed",
        "details": {
            "call_uuid": "uuid-77",
            "call_duration": 63,
            "call_state": "ANSWER",
            "hangup_cause_name": "NORMAL_CLEARING",
            "initiation_time": "2026-08-23 10:00:00+05:30",
            "end_time": "2026-08-23 10:01:03+05:30"
        }
    }))
    .expect("completed snapshot decodes");
    assert!(!completed.is_live());
    assert_eq!(completed.call_uuid(), Some("uuid-77"));
}

/// Scenario: first page of recent calls with provider-formatted timestamps
#[test]
fn test_recent_calls_first_page() {
    let page: RecentCallsPage = serde_json::from_value(serde_json::json!({
        "calls": [
            {
                "call_uuid": "u1",
                "from_number": "+918879415567",
                "to_number": "+919876543210",
                "call_direction": "outbound",
                "call_duration": 42,
                "call_state": "ANSWER",
                "initiation_time": "2026-08-23 10:00:00+05:30",
                "end_time": "2026-08-23 10:00:42+05:30"
            }
        ],
        "meta": { "limit": 10, "offset": 0, "total_count": 1 }
    }))
    .expect("recent calls page decodes");

    assert_eq!(page.meta.limit, 10);
    assert_eq!(page.calls[0].call_duration, Some(42));
}

// ============================================================================
// Directory and Analysis
// ============================================================================

/// Scenario: wizard loads agents and saved from-numbers for its dropdowns
#[test]
fn test_directory_listings() {
    let agents: Vec<Agent> = serde_json::from_value(serde_json::json!([
        {
            "agent_id": "agent-1",
            "name": "Sales Bot",
            "from_number": "+918879415567",
            "initial_messages": [{"text": "Namaste"}],
            "settings": {"voice": "Maushmi"}
        }
    ]))
    .expect("agents decode");
    assert_eq!(agents[0].from_number.as_deref(), Some("+918879415567"));

    let numbers: Vec<SavedPhoneNumber> = serde_json::from_value(serde_json::json!([
        { "id": 1, "phone_number": "+918879415567", "number_type": "from", "label": "Main" },
        { "id": 2, "phone_number": "+919876543210", "number_type": "recipient" }
    ]))
    .expect("numbers decode");
    assert_eq!(numbers[0].number_type, NumberType::From);
    assert!(numbers[1].label.is_none());
}

/// Scenario: analysis mapping resolves for one call and is missing for another
#[test]
fn test_analysis_mapping_and_progress() {
    let mapping: CallMapping = serde_json::from_value(serde_json::json!({
        "id": 11,
        "plivo_call_uuid": "uuid-1",
        "ultravox_call_id": "vt-1",
        "timestamp": "2026-08-23T10:02:00"
    }))
    .expect("mapping decodes");
    assert_eq!(mapping.ultravox_call_id.as_deref(), Some("vt-1"));

    let unmapped: CallMapping = serde_json::from_value(serde_json::json!({
        "id": 12,
        "plivo_call_uuid": "uuid-2",
        "ultravox_call_id": null
    }))
    .expect("unmapped record decodes");
    assert!(unmapped.ultravox_call_id.is_none());

    // One of two calls fully analyzed
    let progress = AnalysisProgress::new(1, 2);
    assert_eq!(progress.percent(), 50);
    assert!(!progress.is_complete());

    let parsed = "mapping-error".parse::<AnalysisGap>().expect("gap parses");
    assert_eq!(parsed, AnalysisGap::MappingError);
}
