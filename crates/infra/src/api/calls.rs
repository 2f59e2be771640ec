//! Single-call endpoint adapter

use calldeck_domain::{CallDispatch, CallRequest, CallStatusSnapshot, RecentCallsPage};
use tracing::instrument;

use super::client::ApiClient;
use super::errors::ApiError;

/// HTTP adapter for call dispatch, status lookups and call history
#[derive(Clone)]
pub struct CallsApi {
    client: ApiClient,
}

impl CallsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Place a single outbound call
    #[instrument(skip(self, request), fields(to = %request.recipient_phone_number))]
    pub async fn make_call(
        &self,
        request: &CallRequest,
    ) -> std::result::Result<CallDispatch, ApiError> {
        self.client.post("/make_call", request).await
    }

    /// Fetch the live-or-completed status of one call
    #[instrument(skip(self))]
    pub async fn call_status(
        &self,
        call_uuid: &str,
    ) -> std::result::Result<CallStatusSnapshot, ApiError> {
        self.client.get(&format!("/call_status/{call_uuid}")).await
    }

    /// Fetch one page of recent calls
    #[instrument(skip(self))]
    pub async fn recent_calls(
        &self,
        limit: u32,
        offset: u32,
    ) -> std::result::Result<RecentCallsPage, ApiError> {
        self.client.get(&format!("/recent_calls?limit={limit}&offset={offset}")).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn api_for(server: &MockServer) -> CallsApi {
        let client = ApiClient::builder().base_url(server.uri()).build().expect("api client");
        CallsApi::new(client)
    }

    #[tokio::test]
    async fn test_make_call_returns_dispatch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/make_call"))
            .and(body_partial_json(serde_json::json!({
                "recipient_phone_number": "+919812345678",
                "plivo_phone_number": "+918879415567"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "message": "Call initiated",
                "call_uuid": "uuid-77"
            })))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let request = CallRequest::new("+919812345678", "+918879415567");
        let dispatch = api.make_call(&request).await.unwrap();
        assert_eq!(dispatch.call_uuid, "uuid-77");
    }

    #[tokio::test]
    async fn test_make_call_without_status_discriminator_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/make_call"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "call_uuid": "uuid-78" })),
            )
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let request = CallRequest::new("+919812345678", "+918879415567");
        match api.make_call(&request).await {
            Err(ApiError::Decode(msg)) => assert!(msg.contains("status")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_status_decodes_completed_arm() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/call_status/uuid-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "call_status": "completed",
                "details": { "call_uuid": "uuid-9", "call_duration": 42 }
            })))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let snapshot = api.call_status("uuid-9").await.unwrap();
        assert!(!snapshot.is_live());
        assert_eq!(snapshot.call_uuid(), Some("uuid-9"));
    }

    #[tokio::test]
    async fn test_recent_calls_sends_pagination_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recent_calls"))
            .and(query_param("limit", "5"))
            .and(query_param("offset", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "calls": [{ "call_uuid": "u1", "call_duration": 12 }],
                "meta": { "limit": 5, "offset": 10, "total_count": 40 }
            })))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let page = api.recent_calls(5, 10).await.unwrap();
        assert_eq!(page.calls.len(), 1);
        assert_eq!(page.meta.total_count, 40);
    }
}
