//! Error types for session storage.

use copper_courier_core::ChannelUserId;
use std::fmt;

/// Errors from session store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Reading a user's stored context failed.
    ReadFailed {
        user: ChannelUserId,
        reason: String,
    },
    /// Persisting a user's updated context failed.
    WriteFailed {
        user: ChannelUserId,
        reason: String,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed { user, reason } => {
                write!(f, "failed to read session for user '{user}': {reason}")
            }
            Self::WriteFailed { user, reason } => {
                write!(f, "failed to persist session for user '{user}': {reason}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_display() {
        let err = SessionError::ReadFailed {
            user: ChannelUserId::new("alice"),
            reason: "store offline".to_string(),
        };
        assert!(err.to_string().contains("alice"));
        assert!(err.to_string().contains("store offline"));
    }
}
