//! Reply hook for the copper-courier chat bot.
//!
//! Wires the dialogue engine, the retrieval engine, the session store, and
//! the outbound dispatcher into one message handler: each inbound user
//! message is exchanged with the dialogue engine, and when the engine
//! requests a hand-off the answer comes from the retrieval engine's top
//! passage instead.
//!
//! The chat transport hosts this crate: it implements
//! [`OutboundDispatcher`] (and usually [`SessionStore`] over its own
//! storage), builds the two clients from [`RelayConfig`], and calls
//! [`ReplyHook::handle`] for every inbound text message.
//!
//! [`SessionStore`]: copper_courier_session::SessionStore

pub mod config;
pub mod error;
pub mod hook;
pub mod outbound;

pub use config::{DialogueConfig, RelayConfig, RetrievalConfig};
pub use error::DispatchError;
pub use hook::{ONBOARDING_CASCADE, RETRIEVAL_ERROR_TEXT, ReplyHook, TurnOutcome};
pub use outbound::OutboundDispatcher;
