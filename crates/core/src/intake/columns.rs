//! Column auto-detection for contact tables
//!
//! Uploaded files name their columns freely ("Phone Number", "Mobile",
//! "Customer Contact"). Detection scans headers in order and maps the first
//! header containing a known hint; the operator can override either mapping
//! afterwards.

use calldeck_domain::constants::{NAME_COLUMN_HINTS, PHONE_COLUMN_HINTS};

/// Indices of the phone and name columns within a table's header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub phone: Option<usize>,
    pub name: Option<usize>,
}

impl ColumnMapping {
    /// Auto-detect phone and name columns from a header row.
    ///
    /// Headers are matched case-insensitively against hint substrings; the
    /// first header that contains any hint wins, so header order outranks
    /// hint order. Unmatched columns stay unmapped.
    pub fn detect(headers: &[String]) -> Self {
        Self {
            phone: find_column(headers, &PHONE_COLUMN_HINTS),
            name: find_column(headers, &NAME_COLUMN_HINTS),
        }
    }

    /// Whether a phone column is mapped, the precondition for classification
    pub fn has_phone(&self) -> bool {
        self.phone.is_some()
    }
}

fn find_column(headers: &[String], hints: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.to_lowercase();
        hints.iter().any(|hint| header.contains(hint))
    })
}
