//! Outbound dispatch seam.
//!
//! The chat transport owns delivery; the relay only needs to hand it text.
//! Single messages carry one line (a retrieved passage); cascades carry
//! the dialogue engine's multi-line replies in order.

use crate::error::DispatchError;
use async_trait::async_trait;
use copper_courier_core::ChannelUserId;

/// Trait for delivering text to a user's chat channel.
#[async_trait]
pub trait OutboundDispatcher: Send + Sync {
    /// Sends a single text message to the user.
    async fn send_text(&self, text: &str, user: &ChannelUserId) -> Result<(), DispatchError>;

    /// Sends a sequence of messages to the user, in order.
    async fn send_cascade(&self, lines: &[String], user: &ChannelUserId)
    -> Result<(), DispatchError>;
}
