//! Error types for outbound dispatch.

use copper_courier_core::ChannelUserId;
use std::fmt;

/// Errors from the outbound dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Delivering a message to the user's channel failed.
    SendFailed {
        user: ChannelUserId,
        reason: String,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SendFailed { user, reason } => {
                write!(f, "failed to send message to user '{user}': {reason}")
            }
        }
    }
}

impl std::error::Error for DispatchError {}
