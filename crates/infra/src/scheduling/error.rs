//! Lifecycle errors shared by the background monitors

use std::time::Duration;

use calldeck_domain::CallDeckError;
use thiserror::Error;

use crate::errors::InfraError;

/// Failures from the monitor start/stop lifecycle
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler already running")]
    AlreadyRunning,

    #[error("scheduler not running")]
    NotRunning,

    /// Background task did not wind down within the join timeout
    #[error("scheduler task did not stop within {duration:?}")]
    Timeout {
        duration: Duration,
        #[source]
        source: tokio::time::error::Elapsed,
    },

    /// Background task panicked or was aborted
    #[error("scheduler task failed: {0}")]
    TaskJoinFailed(#[from] tokio::task::JoinError),
}

impl From<SchedulerError> for InfraError {
    fn from(err: SchedulerError) -> Self {
        let domain = match err {
            SchedulerError::AlreadyRunning | SchedulerError::NotRunning => {
                CallDeckError::InvalidInput(err.to_string())
            }
            SchedulerError::Timeout { .. } | SchedulerError::TaskJoinFailed(_) => {
                CallDeckError::Internal(err.to_string())
            }
        };
        InfraError(domain)
    }
}

impl From<SchedulerError> for CallDeckError {
    fn from(err: SchedulerError) -> Self {
        InfraError::from(err).into()
    }
}

/// Result alias for monitor lifecycle operations
pub type SchedulerResult<T> = Result<T, SchedulerError>;
