//! Session storage seam.
//!
//! The host process owns the real storage (the chat transport's session
//! component); the relay only needs to read the prior context before a
//! dialogue call and persist the updated one after. [`MemorySessionStore`]
//! backs development hosts and tests.

use crate::context::DialogueContext;
use crate::error::SessionError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use copper_courier_core::ChannelUserId;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Trait for per-user conversation context storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored context for a user, if any.
    async fn context(&self, user: &ChannelUserId)
    -> Result<Option<DialogueContext>, SessionError>;

    /// Persists a user's updated context, replacing any previous one.
    async fn update(
        &self,
        user: &ChannelUserId,
        context: DialogueContext,
    ) -> Result<(), SessionError>;
}

/// A stored session entry.
#[derive(Debug, Clone)]
struct SessionEntry {
    context: DialogueContext,
    updated_at: DateTime<Utc>,
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<ChannelUserId, SessionEntry>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns when a user's context was last updated, if it exists.
    pub async fn updated_at(&self, user: &ChannelUserId) -> Option<DateTime<Utc>> {
        self.sessions
            .read()
            .await
            .get(user)
            .map(|entry| entry.updated_at)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn context(
        &self,
        user: &ChannelUserId,
    ) -> Result<Option<DialogueContext>, SessionError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(user)
            .map(|entry| entry.context.clone()))
    }

    async fn update(
        &self,
        user: &ChannelUserId,
        context: DialogueContext,
    ) -> Result<(), SessionError> {
        self.sessions.write().await.insert(
            user.clone(),
            SessionEntry {
                context,
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }
}
