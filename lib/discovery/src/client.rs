//! Retrieval engine client.
//!
//! Provides the [`RetrievalService`] seam over the hosted document-search
//! service: one natural-language query per call, scoped by the configured
//! [`QueryScope`], with passage extraction enabled.

use crate::error::RetrievalError;
use crate::query::{QueryResponse, QueryScope};
use async_trait::async_trait;
use copper_courier_core::ServiceCredentials;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout for retrieval engine calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for the retrieval engine's query operation.
#[async_trait]
pub trait RetrievalService: Send + Sync {
    /// Runs one natural-language query, returning ranked passages.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be issued or the response
    /// cannot be parsed.
    async fn query(&self, text: &str) -> Result<QueryResponse, RetrievalError>;
}

/// HTTP client for the hosted retrieval engine.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    http: reqwest::Client,
    base_url: String,
    credentials: ServiceCredentials,
    scope: QueryScope,
}

impl DiscoveryClient {
    /// Creates a client for the service at `base_url`, querying within
    /// `scope`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        credentials: ServiceCredentials,
        scope: QueryScope,
    ) -> Result<Self, RetrievalError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RetrievalError::InvalidConfig {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            scope,
        })
    }

    /// Returns the scope this client queries within.
    #[must_use]
    pub fn scope(&self) -> &QueryScope {
        &self.scope
    }

    fn query_url(&self) -> String {
        format!(
            "{}/v1/environments/{}/collections/{}/query",
            self.base_url, self.scope.environment_id, self.scope.collection_id
        )
    }
}

#[async_trait]
impl RetrievalService for DiscoveryClient {
    async fn query(&self, text: &str) -> Result<QueryResponse, RetrievalError> {
        let request = self.scope.request(text);
        let url = self.query_url();
        debug!(%url, "issuing retrieval query");

        let response = self
            .http
            .post(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(&request)
            .send()
            .await
            .map_err(|e| RetrievalError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RetrievalError::ServiceStatus {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RetrievalError::ResponseParse {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> DiscoveryClient {
        DiscoveryClient::new(
            server.url(),
            ServiceCredentials::basic("svc", "secret"),
            QueryScope::new("env-1", "coll-1", "conf-1"),
        )
        .expect("build client")
    }

    #[tokio::test]
    async fn query_posts_scoped_request_with_passages_enabled() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/environments/env-1/collections/coll-1/query")
            .match_header("authorization", mockito::Matcher::Regex("^Basic ".into()))
            .match_body(mockito::Matcher::Json(json!({
                "configuration_id": "conf-1",
                "passages": true,
                "natural_language_query": "where is my order",
            })))
            .with_status(200)
            .with_body(
                r#"{"passages":[
                    {"passage_score":12.4,"passage_text":"Orders ship within two days."},
                    {"passage_score":3.1,"passage_text":"Contact support for returns."}
                ]}"#,
            )
            .create_async()
            .await;

        let response = client(&server)
            .query("where is my order")
            .await
            .expect("query");

        let best = response.best().expect("top passage");
        assert_eq!(best.passage_text, "Orders ship within two days.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn response_without_passages_parses_to_empty_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/environments/env-1/collections/coll-1/query")
            .with_status(200)
            .with_body(r#"{"matching_results":0,"results":[]}"#)
            .create_async()
            .await;

        let response = client(&server).query("anything").await.expect("query");
        assert!(response.best().is_none());
    }

    #[tokio::test]
    async fn service_failure_maps_to_service_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/environments/env-1/collections/coll-1/query")
            .with_status(503)
            .with_body("service unavailable")
            .create_async()
            .await;

        let err = client(&server)
            .query("anything")
            .await
            .expect_err("query should fail");

        assert_eq!(err, RetrievalError::ServiceStatus {
            status: 503,
            message: "service unavailable".to_string(),
        });
    }
}
