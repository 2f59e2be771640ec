//! Response envelope shared by every backend endpoint
//!
//! The backend wraps each JSON body in a `status: "success"|"error"`
//! discriminator with an optional `message`, and puts the payload fields
//! alongside them at the top level.

use serde::Deserialize;

use super::errors::ApiError;

/// Decoded backend response: discriminator, optional message, and the
/// endpoint payload flattened next to them.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    data: T,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning `status: "error"` into a backend error
    /// carrying the backend's message.
    pub(crate) fn into_result(self) -> Result<T, ApiError> {
        match self.status.as_str() {
            "success" => Ok(self.data),
            "error" => Err(ApiError::Backend(
                self.message.unwrap_or_else(|| "backend reported an error".into()),
            )),
            other => {
                Err(ApiError::Decode(format!("unexpected response status {other:?}")))
            }
        }
    }
}

/// Payload for endpoints that return nothing beyond the envelope itself.
#[derive(Debug, Deserialize)]
pub(crate) struct Empty {}

/// Best-effort view of a non-2xx body, used to pull the backend's message
/// out of an error response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

#[cfg(test)]
mod tests {
    use calldeck_domain::CallStatusSnapshot;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct CountPayload {
        contacts_added: u32,
    }

    #[test]
    fn test_success_envelope_unwraps_flattened_payload() {
        let json = serde_json::json!({
            "status": "success",
            "message": "Contacts added",
            "contacts_added": 3
        });

        let envelope: Envelope<CountPayload> = serde_json::from_value(json).unwrap();
        let payload = envelope.into_result().unwrap();
        assert_eq!(payload.contacts_added, 3);
    }

    #[test]
    fn test_error_envelope_surfaces_backend_message() {
        let json = serde_json::json!({
            "status": "error",
            "message": "Campaign not found"
        });

        let envelope: Envelope<Empty> = serde_json::from_value(json).unwrap();
        match envelope.into_result() {
            Err(ApiError::Backend(msg)) => assert_eq!(msg, "Campaign not found"),
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_status_is_a_decode_error() {
        let json = serde_json::json!({ "status": "partial" });

        let envelope: Envelope<Empty> = serde_json::from_value(json).unwrap();
        match envelope.into_result() {
            Err(ApiError::Decode(msg)) => assert!(msg.contains("partial")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_status_fails_to_decode() {
        let json = serde_json::json!({ "message": "no discriminator here" });

        let result: Result<Envelope<Empty>, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_tagged_call_status_payload_survives_flattening() {
        let json = serde_json::json!({
            "status": "success",
            "call_status": "completed",
            "details": { "call_uuid": "uuid-9", "call_duration": 31 }
        });

        let envelope: Envelope<CallStatusSnapshot> = serde_json::from_value(json).unwrap();
        let snapshot = envelope.into_result().unwrap();
        assert!(!snapshot.is_live());
        assert_eq!(snapshot.call_uuid(), Some("uuid-9"));
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());

        let body: ErrorBody =
            serde_json::from_str(r#"{"status":"error","message":"Invalid status value"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid status value"));
    }
}
