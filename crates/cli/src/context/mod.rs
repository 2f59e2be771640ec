//! Application context - dependency injection container
//!
//! One `AppContext` is built per invocation from the resolved configuration
//! and handed to the command handlers. The endpoint adapters are cheap
//! clones over one shared HTTP client, so handlers borrow what they need.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use calldeck_core::{AnalysisGateway, CampaignGateway, MonitoringGateway, SubmissionService};
use calldeck_domain::{Config, Result};
use calldeck_infra::config;
use calldeck_infra::{
    AnalysisApi, AnalysisScheduler, ApiClient, ApiClientConfig, CallsApi, CampaignMonitor,
    CampaignMonitorConfig, CampaignsApi, DirectoryApi, LiveCallMonitor,
};

/// Everything a command handler needs, wired once per invocation
pub struct AppContext {
    /// Resolved configuration (explicit file, probed files, environment)
    pub config: Config,
    /// Shared HTTP client, also used for the status probe
    pub client: ApiClient,

    // Endpoint adapters
    pub campaigns: CampaignsApi,
    pub calls: CallsApi,
    pub directory: DirectoryApi,
    pub analysis: AnalysisApi,
}

impl AppContext {
    /// Build the context from an explicit config file, or from the probed
    /// locations and environment when no file is named.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration cannot be loaded or the HTTP
    /// client cannot be built.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => config::load_from_file(Some(path))?,
            None => config::load()?,
        };
        Self::from_config(config)
    }

    /// Wire the endpoint adapters over one shared client.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = ApiClient::new(ApiClientConfig::from(&config.api))?;

        Ok(Self {
            campaigns: CampaignsApi::new(client.clone()),
            calls: CallsApi::new(client.clone()),
            directory: DirectoryApi::new(client.clone()),
            analysis: AnalysisApi::new(client.clone()),
            client,
            config,
        })
    }

    /// Campaign port for the submission flow
    pub fn campaign_gateway(&self) -> Arc<dyn CampaignGateway> {
        Arc::new(self.campaigns.clone())
    }

    /// Monitoring port for the background monitors
    pub fn monitoring_gateway(&self) -> Arc<dyn MonitoringGateway> {
        Arc::new(self.campaigns.clone())
    }

    /// Analysis port for availability checking
    pub fn analysis_gateway(&self) -> Arc<dyn AnalysisGateway> {
        Arc::new(self.analysis.clone())
    }

    /// Submission service over the campaign gateway
    pub fn submission_service(&self) -> SubmissionService {
        SubmissionService::new(self.campaign_gateway())
    }

    /// Campaign monitor honoring the configured poll interval
    pub fn campaign_monitor(&self, campaign_id: i64) -> CampaignMonitor {
        CampaignMonitor::with_config(
            self.monitoring_gateway(),
            campaign_id,
            CampaignMonitorConfig::from(&self.config.monitor),
        )
    }

    /// Live-call monitor honoring the configured poll interval
    pub fn live_call_monitor(&self, call_uuid: &str) -> LiveCallMonitor {
        LiveCallMonitor::with_interval(
            self.monitoring_gateway(),
            call_uuid,
            Duration::from_secs(self.config.monitor.live_poll_interval_secs),
        )
    }

    /// Analysis scheduler honoring the configured batch and retry policy
    pub fn analysis_scheduler(&self) -> AnalysisScheduler {
        AnalysisScheduler::new(self.analysis_gateway(), &self.config.monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wires_from_default_config() {
        let context = AppContext::from_config(Config::default()).expect("default config wires");

        assert_eq!(context.config.dialing.country_code, "91");
        assert_eq!(context.config.monitor.poll_interval_secs, 5);
    }

    #[test]
    fn test_load_with_missing_explicit_file_is_an_error() {
        let result = AppContext::load(Some(PathBuf::from("/no/such/calldeck.toml")));

        assert!(result.is_err());
    }
}
