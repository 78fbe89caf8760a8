//! Client error types
//!
//! Every failure an outbound call can produce, from transport problems to
//! error statuses returned by the backend.

use thiserror::Error;

/// Errors surfaced by the HTTP client adapter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No response arrived before the request timeout elapsed
    #[error("Request timed out")]
    Timeout,

    /// Connection refused, DNS failure, aborted fetch, ...
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Status {
        status: u16,
        /// The `error` string field of the response body, when the body had one
        message: Option<String>,
    },

    /// Success response whose body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ClientError {
    /// HTTP status code, if the backend responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `401 Unauthorized`, i.e. the session is gone
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Structured message supplied by the backend. Empty strings count as absent.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detection() {
        let err = ClientError::Status {
            status: 401,
            message: None,
        };
        assert!(err.is_unauthorized());
        assert!(!ClientError::Timeout.is_unauthorized());
        assert!(!ClientError::Status {
            status: 403,
            message: None
        }
        .is_unauthorized());
    }

    #[test]
    fn test_api_message_ignores_empty() {
        let with_message = ClientError::Status {
            status: 400,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(with_message.api_message(), Some("Invalid credentials"));

        let empty = ClientError::Status {
            status: 400,
            message: Some(String::new()),
        };
        assert_eq!(empty.api_message(), None);
        assert_eq!(ClientError::Network("refused".into()).api_message(), None);
    }

    #[test]
    fn test_display() {
        let err = ClientError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 500: no error message");
    }
}
