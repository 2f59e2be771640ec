//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Dialing defaults (overridable via `DialingConfig`)
pub const DEFAULT_COUNTRY_CODE: &str = "91";
pub const DEFAULT_NATIONAL_LEN: usize = 10;
pub const PHONE_MIN_LEN: usize = 10;

// Rejection reasons surfaced to the operator
pub const INVALID_PHONE_REASON: &str =
    "Invalid phone format. Should be a mobile number with country code (e.g., +918879415567)";
pub const MISSING_PHONE_REASON: &str = "Missing phone number";

// Contact defaults
pub const DEFAULT_CONTACT_NAME_PREFIX: &str = "Contact";

// Column auto-detection hints (case-insensitive substring match, first wins)
pub const PHONE_COLUMN_HINTS: [&str; 4] = ["phone", "mobile", "contact", "number"];
pub const NAME_COLUMN_HINTS: [&str; 3] = ["name", "customer", "client"];

// Monitoring configuration
pub const MONITOR_POLL_INTERVAL_SECS: u64 = 5;
pub const LIVE_POLL_INTERVAL_SECS: u64 = 1;
pub const ANALYSIS_BATCH_SIZE: usize = 5;
pub const ANALYSIS_MAX_RETRIES: u32 = 3;
pub const ANALYSIS_RETRY_DELAY_SECS: u64 = 5;

// API client configuration
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const SERVER_STATUS_TIMEOUT_SECS: u64 = 5;
pub const RECENT_CALLS_DEFAULT_LIMIT: u32 = 10;
