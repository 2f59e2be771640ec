//! Post-call analysis availability types
//!
//! A completed call has usable analysis once all three artifacts exist on
//! the backend: transcript, recording and summary. Availability is probed
//! per call and aggregated into campaign-level progress.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::status_strings;

/// Mapping between a telephony call UUID and the transcription provider's
/// call id, from `GET /call_mapping/{uuid}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallMapping {
    pub id: i64,
    pub plivo_call_uuid: String,
    #[serde(default)]
    pub ultravox_call_id: Option<String>,
    #[serde(default)]
    pub recipient_phone_number: Option<String>,
    #[serde(default)]
    pub plivo_phone_number: Option<String>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// Why analysis could not be probed for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisGap {
    /// Mapping lookup failed outright
    MappingError,
    /// Mapping exists but carries no transcription-provider id yet
    NoMapping,
}

status_strings!(AnalysisGap {
    MappingError => "mapping-error",
    NoMapping => "no-mapping",
});

/// Artifact availability for one completed call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisAvailability {
    pub call_uuid: String,
    #[serde(default)]
    pub ultravox_call_id: Option<String>,
    #[serde(default)]
    pub transcript: bool,
    #[serde(default)]
    pub recording: bool,
    #[serde(default)]
    pub summary: bool,
    #[serde(default)]
    pub gap: Option<AnalysisGap>,
}

impl AnalysisAvailability {
    /// Availability record for a call whose mapping could not be resolved
    pub fn unavailable(call_uuid: impl Into<String>, gap: AnalysisGap) -> Self {
        Self {
            call_uuid: call_uuid.into(),
            ultravox_call_id: None,
            transcript: false,
            recording: false,
            summary: false,
            gap: Some(gap),
        }
    }

    /// All three artifacts are present
    pub fn is_complete(&self) -> bool {
        self.transcript && self.recording && self.summary
    }
}

/// Aggregate availability across a campaign's completed calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisProgress {
    /// Completed calls with full analysis
    pub available: usize,
    /// Completed calls eligible for analysis
    pub total: usize,
}

impl AnalysisProgress {
    pub fn new(available: usize, total: usize) -> Self {
        Self { available, total }
    }

    /// Percentage of eligible calls with full analysis, rounded to the
    /// nearest whole point. Zero eligible calls reads as zero percent.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let ratio = self.available as f64 / self.total as f64;
        (ratio * 100.0).round() as u8
    }

    /// Every eligible call has full analysis
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.available == self.total
    }
}
