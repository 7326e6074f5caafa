//! Error types for the dialogue engine client.

use std::fmt;

/// Errors from dialogue engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueError {
    /// The client could not be constructed.
    InvalidConfig { reason: String },
    /// The request never produced a response (connect, timeout, transport).
    RequestFailed { reason: String },
    /// The service answered with a non-success status.
    ServiceStatus { status: u16, message: String },
    /// The response body could not be parsed.
    ResponseParse { reason: String },
    /// The service has no workspaces defined.
    NoWorkspaces,
}

impl fmt::Display for DialogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => {
                write!(f, "invalid dialogue client configuration: {reason}")
            }
            Self::RequestFailed { reason } => {
                write!(f, "dialogue request failed: {reason}")
            }
            Self::ServiceStatus { status, message } => {
                write!(f, "dialogue service returned status {status}: {message}")
            }
            Self::ResponseParse { reason } => {
                write!(f, "failed to parse dialogue response: {reason}")
            }
            Self::NoWorkspaces => write!(f, "no workspaces are defined in the dialogue engine"),
        }
    }
}

impl std::error::Error for DialogueError {}
