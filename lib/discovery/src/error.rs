//! Error types for the retrieval engine client.

use std::fmt;

/// Errors from retrieval engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// The client could not be constructed.
    InvalidConfig { reason: String },
    /// The request never produced a response (connect, timeout, transport).
    RequestFailed { reason: String },
    /// The service answered with a non-success status.
    ServiceStatus { status: u16, message: String },
    /// The response body could not be parsed.
    ResponseParse { reason: String },
}

impl fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => {
                write!(f, "invalid retrieval client configuration: {reason}")
            }
            Self::RequestFailed { reason } => {
                write!(f, "retrieval query failed: {reason}")
            }
            Self::ServiceStatus { status, message } => {
                write!(f, "retrieval service returned status {status}: {message}")
            }
            Self::ResponseParse { reason } => {
                write!(f, "failed to parse retrieval response: {reason}")
            }
        }
    }
}

impl std::error::Error for RetrievalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display() {
        let err = RetrievalError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }
}
