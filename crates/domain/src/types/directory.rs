//! Agent and saved-phone-number directory types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status_strings;

/// Configured calling agent from `GET /agents`.
///
/// The wizard only needs `agent_id`, `name` and `from_number`; the prompt
/// and settings blobs are backend-owned and stay loosely typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: String,
    pub name: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub initial_messages: Vec<Value>,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default)]
    pub from_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Which side of a call a saved number is used on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    Recipient,
    From,
}

status_strings!(NumberType {
    Recipient => "recipient",
    From => "from",
});

/// Saved phone number from `GET /phone-numbers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPhoneNumber {
    pub id: i64,
    pub phone_number: String,
    #[serde(default)]
    pub label: Option<String>,
    pub number_type: NumberType,
    #[serde(default)]
    pub last_used: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
