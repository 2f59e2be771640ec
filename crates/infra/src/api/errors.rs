//! Error taxonomy for backend calls
//!
//! Every endpoint failure is classified once, here, so the polling callers
//! can decide uniformly whether asking again is worth anything.

use std::time::Duration;

use calldeck_domain::CallDeckError;
use thiserror::Error;

/// Coarse failure classes the polling callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// The resource is gone (404); asking again will not help
    NotFound,
    /// The request itself was wrong (4xx other than 404)
    Client,
    /// The backend failed (5xx); the next poll may succeed
    Server,
    /// A 2xx envelope carrying `status: "error"`
    Backend,
    /// The body did not parse as the expected shape
    Decode,
    /// The request never completed (transport failure or timeout)
    Network,
}

/// Errors produced while talking to the CallDeck backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// The failure class this error falls into
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::NotFound(_) => ApiErrorCategory::NotFound,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Backend(_) => ApiErrorCategory::Backend,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
        }
    }

    /// Whether a later identical request has any chance of succeeding
    pub fn should_retry(&self) -> bool {
        matches!(self.category(), ApiErrorCategory::Server | ApiErrorCategory::Network)
    }

    /// How long a polling caller should wait before asking again
    pub fn retry_delay_secs(&self) -> u64 {
        match self.category() {
            ApiErrorCategory::Server => 10,
            ApiErrorCategory::Network => 5,
            ApiErrorCategory::NotFound
            | ApiErrorCategory::Client
            | ApiErrorCategory::Backend
            | ApiErrorCategory::Decode => 0,
        }
    }

    /// True when the backend says the resource does not exist, either as a
    /// plain 404 or as a logical error envelope.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.category(), ApiErrorCategory::NotFound | ApiErrorCategory::Backend)
    }
}

impl From<ApiError> for CallDeckError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(msg) => CallDeckError::NotFound(msg),
            ApiError::Client(msg) => CallDeckError::InvalidInput(msg),
            ApiError::Server(msg) | ApiError::Backend(msg) => CallDeckError::Backend(msg),
            ApiError::Decode(msg) => CallDeckError::Decode(msg),
            ApiError::Network(msg) => CallDeckError::Network(msg),
            ApiError::Timeout(duration) => {
                CallDeckError::Network(format!("request timed out after {duration:?}"))
            }
        }
    }
}

/// Transport-level failures arrive as domain errors from the HTTP client.
impl From<CallDeckError> for ApiError {
    fn from(err: CallDeckError) -> Self {
        match err {
            CallDeckError::Network(msg) => Self::Network(msg),
            CallDeckError::NotFound(msg) => Self::NotFound(msg),
            CallDeckError::InvalidInput(msg) => Self::Client(msg),
            CallDeckError::Backend(msg) => Self::Server(msg),
            CallDeckError::Decode(msg) => Self::Decode(msg),
            other => Self::Client(other.to_string()),
        }
    }
}
