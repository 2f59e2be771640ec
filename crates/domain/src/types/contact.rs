//! Contact types: client-side intake results and server-owned campaign rows

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::status_strings;

/// Lifecycle status of a campaign contact, as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    Pending,
    Calling,
    Completed,
    Failed,
    NoAnswer,
}

status_strings!(ContactStatus {
    Pending => "pending",
    Calling => "calling",
    Completed => "completed",
    Failed => "failed",
    NoAnswer => "no-answer",
});

impl ContactStatus {
    /// Whether the backend may still change this contact's status
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::NoAnswer)
    }
}

/// A contact accepted by the intake classifier.
///
/// Client-only until submitted; `id` is the source row index and is not
/// stable across re-parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: usize,
    pub name: String,
    /// Normalized `+<countrycode><digits>` number
    pub phone: String,
    /// Operator-controlled inclusion flag
    pub selected: bool,
    /// Original row, preserved verbatim for backend submission
    pub data: Map<String, Value>,
    /// True when normalization altered the raw input
    pub was_fixed: bool,
}

/// A contact rejected by the intake classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidContact {
    pub id: usize,
    pub name: String,
    /// Raw phone cell as it appeared in the file
    pub phone: String,
    pub data: Map<String, Value>,
    /// Human-readable rejection cause, never empty
    pub reason: String,
}

/// Contact payload for the bulk-insert endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub status: ContactStatus,
    pub additional_data: Map<String, Value>,
}

impl From<&Contact> for NewContact {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            status: ContactStatus::Pending,
            additional_data: contact.data.clone(),
        }
    }
}

/// Server-owned campaign contact row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignContact {
    pub id: i64,
    pub campaign_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub phone: String,
    pub status: ContactStatus,
    #[serde(default)]
    pub call_uuid: Option<String>,
    #[serde(default)]
    pub additional_data: Option<Value>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}
