//! Single-call dispatch and call status types
//!
//! `CallStatusSnapshot` mirrors the backend's two-armed response: live calls
//! and completed calls carry different detail sets, discriminated by the
//! `call_status` field with the payload under `details`.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Request body for `POST /make_call`.
///
/// Only the two phone numbers are required; the backend fills defaults for
/// everything else, so unset options are omitted from the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    pub recipient_phone_number: String,
    pub plivo_phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

impl CallRequest {
    /// Bare request with required fields only
    pub fn new(recipient: impl Into<String>, from_number: impl Into<String>) -> Self {
        Self {
            recipient_phone_number: recipient.into(),
            plivo_phone_number: from_number.into(),
            system_prompt: None,
            language_hint: None,
            max_duration: None,
            voice: None,
        }
    }
}

/// Successful `POST /make_call` response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallDispatch {
    pub call_uuid: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// Telephony-provider state of a live call.
///
/// Foreign wire value, so unrecognized states map to `Unknown` instead of
/// failing the whole snapshot decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiveCallState {
    Ringing,
    InProgress,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for LiveCallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ringing => write!(f, "ringing"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Detail block for a call still in flight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveCallDetails {
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default, rename = "from")]
    pub from_number: Option<String>,
    #[serde(default, rename = "to")]
    pub to_number: Option<String>,
    #[serde(default)]
    pub call_status: Option<LiveCallState>,
    #[serde(default)]
    pub caller_name: Option<String>,
    #[serde(default)]
    pub call_uuid: Option<String>,
    #[serde(default)]
    pub session_start: Option<String>,
}

/// Detail block for a call that has already ended
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletedCallDetails {
    #[serde(default)]
    pub answer_time: Option<String>,
    #[serde(default)]
    pub bill_duration: Option<i64>,
    #[serde(default)]
    pub call_direction: Option<String>,
    #[serde(default)]
    pub call_duration: Option<i64>,
    #[serde(default)]
    pub call_state: Option<String>,
    #[serde(default)]
    pub call_uuid: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub from_number: Option<String>,
    #[serde(default)]
    pub to_number: Option<String>,
    #[serde(default)]
    pub hangup_cause_name: Option<String>,
    #[serde(default)]
    pub hangup_source: Option<String>,
    #[serde(default)]
    pub initiation_time: Option<String>,
}

/// One `GET /call_status/{uuid}` observation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "call_status", content = "details", rename_all = "lowercase")]
pub enum CallStatusSnapshot {
    Live(LiveCallDetails),
    Completed(CompletedCallDetails),
}

impl CallStatusSnapshot {
    /// Whether the call is still in flight
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Call UUID reported inside the detail block, when present
    pub fn call_uuid(&self) -> Option<&str> {
        match self {
            Self::Live(d) => d.call_uuid.as_deref(),
            Self::Completed(d) => d.call_uuid.as_deref(),
        }
    }
}

/// One entry from the recent-calls listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallRecord {
    pub call_uuid: String,
    #[serde(default)]
    pub from_number: Option<String>,
    #[serde(default)]
    pub to_number: Option<String>,
    #[serde(default)]
    pub call_direction: Option<String>,
    #[serde(default)]
    pub call_duration: Option<i64>,
    #[serde(default)]
    pub call_state: Option<String>,
    #[serde(default)]
    pub initiation_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Pagination block accompanying the recent-calls listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub limit: u32,
    pub offset: u32,
    pub total_count: u32,
}

/// Page of recent calls from `GET /recent_calls`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentCallsPage {
    pub calls: Vec<CallRecord>,
    pub meta: PageMeta,
}
