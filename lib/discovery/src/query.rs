//! Query scoping and result types for the retrieval engine.
//!
//! The scope (environment, collection, configuration) is fixed at
//! configuration time and shared immutably; each request pairs it with its
//! own natural-language query string, so concurrent turns never observe
//! one another's query text.

use copper_courier_core::{CollectionId, ConfigurationId, EnvironmentId};
use serde::{Deserialize, Serialize};

/// Fixed scoping identifiers for retrieval queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryScope {
    /// Retrieval environment to query.
    pub environment_id: EnvironmentId,
    /// Document collection within the environment.
    pub collection_id: CollectionId,
    /// Ingestion configuration the collection was indexed with.
    pub configuration_id: ConfigurationId,
}

impl QueryScope {
    /// Creates a scope from the three configured identifiers.
    #[must_use]
    pub fn new(
        environment_id: impl Into<EnvironmentId>,
        collection_id: impl Into<CollectionId>,
        configuration_id: impl Into<ConfigurationId>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            configuration_id: configuration_id.into(),
        }
    }

    /// Builds the request for one natural-language query within this scope.
    /// Passage extraction is always enabled; the relay answers with passages.
    #[must_use]
    pub fn request(&self, text: impl Into<String>) -> QueryRequest {
        QueryRequest {
            configuration_id: self.configuration_id.clone(),
            passages: true,
            natural_language_query: text.into(),
        }
    }
}

/// One retrieval query as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub configuration_id: ConfigurationId,
    pub passages: bool,
    pub natural_language_query: String,
}

/// A scored span of text returned as a candidate answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Passage {
    /// Relevance score assigned by the service.
    pub passage_score: f64,
    /// The passage text.
    pub passage_text: String,
}

/// Response to a retrieval query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    /// Candidate passages, ranked best first by the service.
    #[serde(default)]
    pub passages: Vec<Passage>,
}

impl QueryResponse {
    /// Returns the top-ranked passage, if the service found any.
    #[must_use]
    pub fn best(&self) -> Option<&Passage> {
        self.passages.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> QueryScope {
        QueryScope::new("env-1", "coll-1", "conf-1")
    }

    #[test]
    fn request_carries_scope_and_query_text() {
        let request = scope().request("how do I reset my password");

        assert_eq!(request.configuration_id, ConfigurationId::new("conf-1"));
        assert!(request.passages);
        assert_eq!(request.natural_language_query, "how do I reset my password");
    }

    #[test]
    fn scope_is_not_mutated_by_requests() {
        let scope = scope();
        let first = scope.request("first question");
        let second = scope.request("second question");

        assert_eq!(first.natural_language_query, "first question");
        assert_eq!(second.natural_language_query, "second question");
        assert_eq!(scope.configuration_id, ConfigurationId::new("conf-1"));
    }

    #[test]
    fn best_returns_first_ranked_passage() {
        let response = QueryResponse {
            passages: vec![
                Passage {
                    passage_score: 0.9,
                    passage_text: "A".to_string(),
                },
                Passage {
                    passage_score: 0.4,
                    passage_text: "B".to_string(),
                },
            ],
        };

        assert_eq!(response.best().map(|p| p.passage_text.as_str()), Some("A"));
    }

    #[test]
    fn best_is_none_without_passages() {
        assert!(QueryResponse::default().best().is_none());
    }
}
