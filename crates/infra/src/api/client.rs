//! HTTP client for the CallDeck backend
//!
//! Wraps a reqwest client with base-URL joining, envelope decoding, and the
//! status-to-error mapping shared by every endpoint adapter. Requests are
//! sent exactly once; a failed request surfaces immediately and the caller's
//! next poll tick is the retry.

use std::time::Duration;

use calldeck_domain::{ApiConfig, CallDeckError};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::envelope::{Envelope, ErrorBody};
use super::errors::ApiError;
use crate::errors::InfraError;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API requests (e.g., "http://localhost:5000/api")
    pub base_url: String,
    /// URL of the server liveness probe, which hangs off the server root
    pub status_url: String,
    /// Timeout applied to each request
    pub timeout: Duration,
}

impl ApiClientConfig {
    /// Config pointing at the given API base URL with the default timeout.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        let trimmed = base.trim_end_matches('/').to_string();
        let root = trimmed.strip_suffix("/api").unwrap_or(&trimmed);
        let status_url = format!("{root}/status");

        Self { base_url: trimmed, status_url, timeout: ApiConfig::default().timeout() }
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            status_url: api.status_url(),
            timeout: api.timeout(),
        }
    }
}

/// API client shared by the endpoint adapters
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Client over `config`, with the timeout baked into the transport
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(config: ApiClientConfig) -> Result<Self, CallDeckError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .no_proxy()
            .build()
            .map_err(|err| CallDeckError::from(InfraError::from(err)))?;

        Ok(Self { http, config })
    }

    /// Builder for when the defaults need adjusting
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Execute a GET request and decode the enveloped payload
    ///
    /// # Arguments
    ///
    /// * `path` - API path including any query string (e.g., "/agents")
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures, non-2xx statuses, backend
    /// error envelopes, and bodies that fail to decode
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None::<&()>).await?;
        self.decode(path, response).await
    }

    /// Execute a POST request with a JSON body and decode the enveloped
    /// payload
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures, non-2xx statuses, backend
    /// error envelopes, and bodies that fail to decode
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        self.decode(path, response).await
    }

    /// Execute a PUT request with a JSON body and decode the enveloped payload
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        self.decode(path, response).await
    }

    /// Execute a DELETE request and decode the enveloped payload
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::DELETE, path, None::<&()>).await?;
        self.decode(path, response).await
    }

    /// Probe the server liveness endpoint
    ///
    /// Uses a short fixed timeout so a hung server reads as offline quickly.
    ///
    /// # Returns
    ///
    /// `true` if the server answered with a success status
    #[instrument(skip(self))]
    pub async fn probe_server(&self) -> Result<bool, ApiError> {
        let url = self.config.status_url.clone();

        debug!(url = %url, "probing server status");

        let timeout = Duration::from_secs(5);
        match self.http.get(&url).timeout(timeout).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("server is online");
                Ok(true)
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "server returned non-success status");
                Ok(false)
            }
            Err(err) => {
                warn!(error = %err, "server status probe failed");
                Err(transport_error(timeout, err))
            }
        }
    }

    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{path}", self.config.base_url);

        debug!(%method, url = %url, "api request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|err| transport_error(self.config.timeout, err))
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, path, &body));
        }

        let envelope: Envelope<T> = response.json().await.map_err(|err| {
            let infra: InfraError = err.into();
            ApiError::from(CallDeckError::from(infra))
        })?;

        envelope.into_result()
    }
}

/// Map a failed send to an error, restoring the timeout that was in force
fn transport_error(timeout: Duration, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout(timeout);
    }
    let infra: InfraError = err.into();
    ApiError::from(CallDeckError::from(infra))
}

/// Map a non-2xx response to an error, preferring the backend's envelope
/// message over the raw body.
fn map_status_error(status: StatusCode, path: &str, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|payload| payload.message)
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("{path} returned status {status}")
            } else {
                format!("{path} returned status {status}: {body}")
            }
        });

    if status == StatusCode::NOT_FOUND {
        ApiError::NotFound(message)
    } else if status.is_client_error() {
        ApiError::Client(message)
    } else if status.is_server_error() {
        ApiError::Server(message)
    } else {
        ApiError::Network(message)
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Set the full client configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Point the client at a different API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn build(self) -> Result<ApiClient, CallDeckError> {
        let mut config = match (self.config, self.base_url) {
            (_, Some(base_url)) => ApiClientConfig::for_base_url(base_url),
            (Some(config), None) => config,
            (None, None) => ApiClientConfig::default(),
        };

        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        ApiClient::new(config)
    }
}
