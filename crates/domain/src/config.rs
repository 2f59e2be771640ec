//! Application configuration structures
//!
//! Plain data; loading (environment variables, config files) lives in the
//! infra crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANALYSIS_BATCH_SIZE, ANALYSIS_MAX_RETRIES, ANALYSIS_RETRY_DELAY_SECS, DEFAULT_API_BASE_URL,
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_COUNTRY_CODE, DEFAULT_NATIONAL_LEN, LIVE_POLL_INTERVAL_SECS,
    MONITOR_POLL_INTERVAL_SECS,
};

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL for the backend API, including the `/api` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL of the server liveness probe.
    ///
    /// The probe endpoint hangs off the server root, not the API prefix, so
    /// a trailing `/api` segment is stripped before appending `/status`.
    pub fn status_url(&self) -> String {
        let root = self.base_url.trim_end_matches('/');
        let root = root.strip_suffix("/api").unwrap_or(root);
        format!("{}/status", root)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

/// Default-country-code policy applied by the phone normalizer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialingConfig {
    /// Country code assumed for bare national numbers (digits, no `+`)
    pub country_code: String,
    /// Length of a bare national number that triggers the country-code
    /// assumption
    pub national_len: usize,
}

impl Default for DialingConfig {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            national_len: DEFAULT_NATIONAL_LEN,
        }
    }
}

/// Polling cadence and analysis-check bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Campaign monitor poll interval in seconds
    pub poll_interval_secs: u64,
    /// Live single-call watch interval in seconds
    pub live_poll_interval_secs: u64,
    /// Concurrent analysis-availability checks per batch
    pub analysis_batch_size: usize,
    /// Retry rounds per contact before giving up on analysis availability
    pub analysis_max_retries: u32,
    /// Delay between analysis retry rounds in seconds
    pub analysis_retry_delay_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: MONITOR_POLL_INTERVAL_SECS,
            live_poll_interval_secs: LIVE_POLL_INTERVAL_SECS,
            analysis_batch_size: ANALYSIS_BATCH_SIZE,
            analysis_max_retries: ANALYSIS_MAX_RETRIES,
            analysis_retry_delay_secs: ANALYSIS_RETRY_DELAY_SECS,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dialing: DialingConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
}
