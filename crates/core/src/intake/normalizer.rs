//! Phone number normalization and validation
//!
//! Raw spreadsheet cells arrive in every shape operators type them in:
//! bare national numbers, numbers with punctuation, numbers with or without
//! a country code. Normalization cleans the input, applies the dialing
//! policy to bare numbers, and validates the result against the E.164
//! shape the telephony backend accepts.

use std::fmt;

use calldeck_domain::constants::{INVALID_PHONE_REASON, MISSING_PHONE_REASON, PHONE_MIN_LEN};
use calldeck_domain::DialingConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// E.164: a leading `+`, a non-zero first digit, then up to 14 more digits.
static E164_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("E164_PATTERN should compile - this is a bug")
});

/// Why a raw phone value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRejection {
    /// The cell was empty or whitespace
    Missing,
    /// The cleaned number does not fit the E.164 shape
    InvalidFormat,
}

impl PhoneRejection {
    /// Operator-facing rejection reason, never empty
    pub fn reason(self) -> &'static str {
        match self {
            Self::Missing => MISSING_PHONE_REASON,
            Self::InvalidFormat => INVALID_PHONE_REASON,
        }
    }
}

impl fmt::Display for PhoneRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for PhoneRejection {}

/// A successfully normalized phone number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPhone {
    /// `+<countrycode><digits>` form
    pub phone: String,
    /// True when normalization altered the raw input
    pub was_fixed: bool,
}

/// Normalizes raw phone values under a configurable dialing policy.
///
/// The policy supplies the country code assumed for bare national numbers
/// and the national-number length that triggers the assumption; everything
/// else about the heuristic is policy-independent.
#[derive(Debug, Clone)]
pub struct PhoneNormalizer {
    policy: DialingConfig,
}

impl PhoneNormalizer {
    /// Normalizer with the default dialing policy
    pub fn new() -> Self {
        Self { policy: DialingConfig::default() }
    }

    /// Normalizer with an explicit dialing policy
    pub fn with_policy(policy: DialingConfig) -> Self {
        Self { policy }
    }

    /// The active dialing policy
    pub fn policy(&self) -> &DialingConfig {
        &self.policy
    }

    /// Normalize a raw phone value.
    ///
    /// Cleaning keeps digits and at most one leading `+`. A cleaned number
    /// already starting with the policy's country code gets a `+` prefix; a
    /// bare number of exactly the national length gets `+<country code>`;
    /// anything else gets a bare `+` and stands or falls on validation.
    pub fn normalize(&self, raw: &str) -> Result<NormalizedPhone, PhoneRejection> {
        if raw.trim().is_empty() {
            return Err(PhoneRejection::Missing);
        }

        let cleaned = clean(raw);
        let code = self.policy.country_code.as_str();

        let phone = if cleaned.starts_with('+') {
            cleaned
        } else if cleaned.starts_with(code) {
            format!("+{cleaned}")
        } else if cleaned.len() == self.policy.national_len {
            format!("+{code}{cleaned}")
        } else {
            format!("+{cleaned}")
        };

        if !is_valid(&phone) {
            return Err(PhoneRejection::InvalidFormat);
        }

        let was_fixed = phone != raw;
        Ok(NormalizedPhone { phone, was_fixed })
    }
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip everything except digits and a single leading `+`
fn clean(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_ascii_digit() {
            cleaned.push(ch);
        } else if ch == '+' && cleaned.is_empty() {
            cleaned.push(ch);
        }
    }
    cleaned
}

fn is_valid(phone: &str) -> bool {
    phone.len() >= PHONE_MIN_LEN && E164_PATTERN.is_match(phone)
}
