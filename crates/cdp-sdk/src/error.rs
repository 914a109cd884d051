//! SDK error types

use std::time::Duration;

use thiserror::Error;

use crate::types::Operation;

/// SDK error type
#[derive(Debug, Error)]
pub enum SdkError {
    /// A façade was used before `init` was called
    #[error("{facade} not initialized with a Client instance")]
    UninitializedClient {
        /// Name of the façade (`Contract`, `Token`)
        facade: &'static str,
    },

    /// The service answered with a non-success status code.
    ///
    /// The display form is exactly `message`: either the server-supplied
    /// `error` field or `HTTP error! status: <code>`.
    #[error("{message}")]
    Remote {
        /// Operation that failed
        operation: Operation,
        /// HTTP status code
        status: u16,
        /// Server-supplied reason, or the generic status message
        message: String,
    },

    /// Network failure below the HTTP layer (connect, TLS, read)
    #[error("Transport error in {operation}: {message}")]
    Transport {
        /// Operation that failed
        operation: Operation,
        /// Underlying error description
        message: String,
    },

    /// The request did not complete within its timeout
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        /// Operation that failed
        operation: Operation,
        /// Timeout that was exceeded
        timeout: Duration,
    },

    /// The response body was not valid JSON
    #[error("Invalid response body for {operation} (status {status}): {message}")]
    Decode {
        /// Operation that failed
        operation: Operation,
        /// HTTP status code of the response
        status: u16,
        /// Parser error description
        message: String,
    },

    /// Client constructed with an empty API key
    #[error("API key must not be empty")]
    MissingApiKey,

    /// Base URL is not an absolute http(s) URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SdkError {
    /// Operation the error belongs to, if it came from a request
    pub fn operation(&self) -> Option<Operation> {
        match self {
            SdkError::Remote { operation, .. }
            | SdkError::Transport { operation, .. }
            | SdkError::Timeout { operation, .. }
            | SdkError::Decode { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// HTTP status code, if the service answered
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Remote { status, .. } | SdkError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error is a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, SdkError::Timeout { .. })
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SdkError {
    fn from(e: toml::de::Error) -> Self {
        SdkError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_message_only() {
        let err = SdkError::Remote {
            operation: Operation::NativeTokenBalance,
            status: 400,
            message: "invalid address".to_string(),
        };
        assert_eq!(err.to_string(), "invalid address");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.operation(), Some(Operation::NativeTokenBalance));
    }

    #[test]
    fn test_uninitialized_has_no_operation() {
        let err = SdkError::UninitializedClient { facade: "Token" };
        assert_eq!(err.to_string(), "Token not initialized with a Client instance");
        assert!(err.operation().is_none());
        assert!(err.status().is_none());
    }

    #[test]
    fn test_timeout_classification() {
        let err = SdkError::Timeout {
            operation: Operation::SwapToken,
            timeout: Duration::from_secs(15),
        };
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "swap_token timed out after 15s");
    }
}
