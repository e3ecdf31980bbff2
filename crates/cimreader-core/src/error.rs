//! Error types for the CIM Reader client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole client.
///
/// Variants map to the failure kinds the controllers distinguish between:
/// local validation, missing session, server rejection, and transport
/// failure. Everything is `Clone` + `Serialize` so errors can cross layer
/// boundaries and be replayed in notifications.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CimError {
    /// Local validation failure (e.g. wrong file type). Never reaches the
    /// network.
    #[error("{0}")]
    Validation(String),

    /// The action requires a signed-in session and none is present.
    #[error("not signed in")]
    Unauthenticated,

    /// The server answered with a non-2xx status. `message` is the best
    /// human-readable explanation extracted from the error body.
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, connection, malformed response body).
    #[error("network error: {0}")]
    Network(String),

    /// The in-flight operation was cancelled before its result was applied.
    #[error("operation cancelled")]
    Cancelled,

    /// File system error (session persistence).
    #[error("io error: {0}")]
    Io(String),

    /// Serialization/deserialization error.
    #[error("{format} error: {message}")]
    Serialization { format: String, message: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

impl CimError {
    /// Creates a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Api error from a status code and extracted message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an Io error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a Serialization error.
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns `true` for the session-missing case, which callers surface
    /// differently from transient request failures.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Returns `true` if this error came from a discarded in-flight result.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_message() {
        let err = CimError::api(500, "Error in OpenAI processing");
        assert_eq!(
            err.to_string(),
            "server error (500): Error in OpenAI processing"
        );
    }

    #[test]
    fn unauthenticated_is_detectable() {
        assert!(CimError::Unauthenticated.is_unauthenticated());
        assert!(!CimError::validation("bad file").is_unauthenticated());
    }
}
