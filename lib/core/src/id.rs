//! Strongly-typed ID types for domain entities.
//!
//! The remote services assign their own identifiers (workspace, environment,
//! collection, configuration), and the chat transport assigns user ids, so
//! these are newtypes over the service-provided strings rather than ids we
//! mint ourselves. The one locally-minted id is [`TurnId`], a ULID created
//! per inbound message to correlate the log lines of a single relay turn.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Macro to generate a strongly-typed wrapper around a service-assigned
/// string identifier.
macro_rules! define_service_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from the service-provided string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_service_id!(
    /// Identifier of a workspace within the dialogue engine.
    WorkspaceId
);

define_service_id!(
    /// Identifier of a retrieval-engine environment.
    EnvironmentId
);

define_service_id!(
    /// Identifier of a document collection within a retrieval environment.
    CollectionId
);

define_service_id!(
    /// Identifier of an ingestion configuration within a retrieval environment.
    ConfigurationId
);

define_service_id!(
    /// Identifier of a user on the originating chat channel.
    ChannelUserId
);

/// Unique identifier for one relay turn (one inbound message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(Ulid);

impl TurnId {
    /// Creates a new turn ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn_{}", self.0)
    }
}
