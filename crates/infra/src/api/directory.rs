//! Agent and phone-number directory adapter

use calldeck_domain::{Agent, NumberType, SavedPhoneNumber};
use serde::Deserialize;
use tracing::instrument;

use super::client::ApiClient;
use super::errors::ApiError;

/// HTTP adapter for the configuration directories
#[derive(Clone)]
pub struct DirectoryApi {
    client: ApiClient,
}

#[derive(Debug, Deserialize)]
struct AgentsPayload {
    agents: Vec<Agent>,
}

#[derive(Debug, Deserialize)]
struct PhoneNumbersPayload {
    phone_numbers: Vec<SavedPhoneNumber>,
}

impl DirectoryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List the configured calling agents
    #[instrument(skip(self))]
    pub async fn agents(&self) -> std::result::Result<Vec<Agent>, ApiError> {
        let payload: AgentsPayload = self.client.get("/agents").await?;
        Ok(payload.agents)
    }

    /// List saved phone numbers, optionally filtered by which side of the
    /// call they are used on
    #[instrument(skip(self))]
    pub async fn phone_numbers(
        &self,
        number_type: Option<NumberType>,
    ) -> std::result::Result<Vec<SavedPhoneNumber>, ApiError> {
        let path = match number_type {
            Some(kind) => format!("/phone-numbers?type={kind}"),
            None => "/phone-numbers".to_string(),
        };

        let payload: PhoneNumbersPayload = self.client.get(&path).await?;
        Ok(payload.phone_numbers)
    }
}
