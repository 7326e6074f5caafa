//! Core domain types for the copper-courier reply hook.
//!
//! This crate provides the strongly-typed identifiers and service
//! credentials shared by the dialogue, discovery, session, and relay
//! crates.

pub mod credential;
pub mod id;

pub use credential::ServiceCredentials;
pub use id::{
    ChannelUserId, CollectionId, ConfigurationId, EnvironmentId, TurnId, WorkspaceId,
};
