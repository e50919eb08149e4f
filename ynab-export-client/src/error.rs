//! Client error types.
//!
//! Two kinds cover every failure mode: a missing credential at startup, and
//! an upstream API failure. Both are terminal for the current run; the tool
//! never retries.

use thiserror::Error;

/// Error type for configuration and API operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required credential is absent from the environment.
    #[error("{0} environment variable is required")]
    MissingCredential(&'static str),

    /// An upstream API call failed (network, auth, not-found, rate limit).
    #[error("{operation} failed{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Api {
        /// Which operation failed, e.g. `"list budgets"`.
        operation: &'static str,
        /// Upstream HTTP status, when one was received.
        status: Option<u16>,
        /// Upstream or transport error message.
        message: String,
    },
}

impl ClientError {
    /// Builds an [`ClientError::Api`] without an HTTP status (transport or
    /// decode failures).
    pub fn api(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            status: None,
            message: message.into(),
        }
    }

    /// Builds an [`ClientError::Api`] carrying the upstream HTTP status.
    pub fn api_status(operation: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            status: Some(status),
            message: message.into(),
        }
    }
}
