//! Opaque conversation context owned by the dialogue engine.
//!
//! The dialogue engine returns an updated context on every turn and expects
//! it back verbatim on the next one. The relay never interprets its
//! contents, with one exception: an optional `action` field through which
//! the engine requests that the current turn be answered by the retrieval
//! engine instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Action lookup value with which the dialogue engine requests a hand-off
/// to the retrieval engine.
pub const DISCOVERY_ACTION: &str = "discovery";

/// Field of the context carrying a requested action.
const ACTION_FIELD: &str = "action";

/// Key within the action object naming the lookup target.
const LOOKUP_KEY: &str = "lookup";

/// Conversation state round-tripped between the dialogue engine and the
/// session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogueContext(JsonValue);

impl DialogueContext {
    /// Creates an empty context for a fresh conversation.
    #[must_use]
    pub fn new() -> Self {
        Self(JsonValue::Object(Map::new()))
    }

    /// Wraps a context value returned by the dialogue engine.
    #[must_use]
    pub fn from_value(value: JsonValue) -> Self {
        Self(value)
    }

    /// Returns the underlying context value.
    #[must_use]
    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    /// Consumes the context, returning the underlying value.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        self.0
    }

    /// Returns true if the engine requested a hand-off to the retrieval
    /// engine on this turn (`action.lookup == "discovery"`).
    #[must_use]
    pub fn handoff_requested(&self) -> bool {
        self.0
            .get(ACTION_FIELD)
            .and_then(|action| action.get(LOOKUP_KEY))
            .and_then(JsonValue::as_str)
            == Some(DISCOVERY_ACTION)
    }

    /// Removes the action field so a hand-off is not replayed on the next
    /// turn. Returns true if an action was present.
    pub fn clear_action(&mut self) -> bool {
        match self.0.as_object_mut() {
            Some(object) => object.remove(ACTION_FIELD).is_some(),
            None => false,
        }
    }
}

impl Default for DialogueContext {
    fn default() -> Self {
        Self::new()
    }
}
