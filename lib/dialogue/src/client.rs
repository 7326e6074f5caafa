//! Dialogue engine client.
//!
//! Provides the [`DialogueService`] seam over the hosted dialogue engine's
//! REST API: workspace lookup, workspace listing, and per-turn message
//! exchange. The wire shapes are owned by the remote service; the structs
//! here carry only the fields the relay consumes and treat the rest as
//! opaque.

use crate::error::DialogueError;
use async_trait::async_trait;
use copper_courier_core::{ServiceCredentials, WorkspaceId};
use copper_courier_session::DialogueContext;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Per-request timeout for dialogue engine calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A workspace defined in the dialogue engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Service-assigned workspace identifier.
    pub workspace_id: WorkspaceId,
    /// Human-readable workspace name.
    pub name: String,
    /// Optional workspace description.
    #[serde(default)]
    pub description: Option<String>,
}

/// One reply from the dialogue engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Updated conversation context, to be persisted and replayed next turn.
    #[serde(default)]
    pub context: DialogueContext,
    /// The engine's reply for this turn.
    #[serde(default)]
    pub output: DialogueOutput,
}

/// Reply text produced by the dialogue engine.
///
/// The engine may answer with several lines; the transport delivers them
/// as a cascade of messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogueOutput {
    #[serde(default)]
    pub text: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WorkspacePage {
    #[serde(default)]
    workspaces: Vec<Workspace>,
}

#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    input: MessageInput<'a>,
    context: &'a DialogueContext,
}

#[derive(Debug, Serialize)]
struct MessageInput<'a> {
    text: &'a str,
}

/// Trait for the dialogue engine's operations.
#[async_trait]
pub trait DialogueService: Send + Sync {
    /// Fetches a workspace by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace does not exist or the call fails.
    async fn workspace(&self, id: &WorkspaceId) -> Result<Workspace, DialogueError>;

    /// Lists all workspaces defined in the service.
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, DialogueError>;

    /// Sends one user utterance plus prior context, returning the engine's
    /// reply and updated context.
    async fn message(
        &self,
        workspace: &WorkspaceId,
        text: &str,
        context: DialogueContext,
    ) -> Result<DialogueTurn, DialogueError>;
}

/// HTTP client for the hosted dialogue engine.
#[derive(Debug, Clone)]
pub struct DialogueClient {
    http: reqwest::Client,
    base_url: String,
    credentials: ServiceCredentials,
}

impl DialogueClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        credentials: ServiceCredentials,
    ) -> Result<Self, DialogueError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DialogueError::InvalidConfig {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl DialogueService for DialogueClient {
    async fn workspace(&self, id: &WorkspaceId) -> Result<Workspace, DialogueError> {
        let response = self
            .http
            .get(self.url(&format!("/v1/workspaces/{id}")))
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await
            .map_err(|e| DialogueError::RequestFailed {
                reason: e.to_string(),
            })?;

        read_json(response).await
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, DialogueError> {
        let response = self
            .http
            .get(self.url("/v1/workspaces"))
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await
            .map_err(|e| DialogueError::RequestFailed {
                reason: e.to_string(),
            })?;

        let page: WorkspacePage = read_json(response).await?;
        Ok(page.workspaces)
    }

    async fn message(
        &self,
        workspace: &WorkspaceId,
        text: &str,
        context: DialogueContext,
    ) -> Result<DialogueTurn, DialogueError> {
        let request = MessageRequest {
            input: MessageInput { text },
            context: &context,
        };

        let response = self
            .http
            .post(self.url(&format!("/v1/workspaces/{workspace}/message")))
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(&request)
            .send()
            .await
            .map_err(|e| DialogueError::RequestFailed {
                reason: e.to_string(),
            })?;

        read_json(response).await
    }
}

/// Checks the response status and decodes the JSON body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, DialogueError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(DialogueError::ServiceStatus {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| DialogueError::ResponseParse {
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> DialogueClient {
        DialogueClient::new(server.url(), ServiceCredentials::basic("svc", "secret"))
            .expect("build client")
    }

    #[tokio::test]
    async fn workspace_is_fetched_by_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/workspaces/ws-1")
            .match_header("authorization", mockito::Matcher::Regex("^Basic ".into()))
            .with_status(200)
            .with_body(r#"{"workspace_id":"ws-1","name":"Support FAQ"}"#)
            .create_async()
            .await;

        let workspace = client(&server)
            .workspace(&WorkspaceId::new("ws-1"))
            .await
            .expect("fetch workspace");

        assert_eq!(workspace.workspace_id, WorkspaceId::new("ws-1"));
        assert_eq!(workspace.name, "Support FAQ");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_workspace_maps_to_service_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/workspaces/ws-missing")
            .with_status(404)
            .with_body("workspace not found")
            .create_async()
            .await;

        let err = client(&server)
            .workspace(&WorkspaceId::new("ws-missing"))
            .await
            .expect_err("lookup should fail");

        assert_eq!(err, DialogueError::ServiceStatus {
            status: 404,
            message: "workspace not found".to_string(),
        });
    }

    #[tokio::test]
    async fn list_workspaces_returns_page_entries() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/workspaces")
            .with_status(200)
            .with_body(
                r#"{"workspaces":[
                    {"workspace_id":"ws-1","name":"First"},
                    {"workspace_id":"ws-2","name":"Second","description":"fallback"}
                ]}"#,
            )
            .create_async()
            .await;

        let workspaces = client(&server)
            .list_workspaces()
            .await
            .expect("list workspaces");

        assert_eq!(workspaces.len(), 2);
        assert_eq!(workspaces[0].workspace_id, WorkspaceId::new("ws-1"));
        assert_eq!(workspaces[1].description.as_deref(), Some("fallback"));
    }

    #[tokio::test]
    async fn message_posts_input_text_and_context() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/workspaces/ws-1/message")
            .match_body(mockito::Matcher::Json(json!({
                "input": { "text": "where is my order" },
                "context": { "conversation_id": "c-1" },
            })))
            .with_status(200)
            .with_body(
                r#"{
                    "context": {"conversation_id":"c-1","action":{"lookup":"discovery"}},
                    "output": {"text":["Let me look that up."]}
                }"#,
            )
            .create_async()
            .await;

        let turn = client(&server)
            .message(
                &WorkspaceId::new("ws-1"),
                "where is my order",
                DialogueContext::from_value(json!({ "conversation_id": "c-1" })),
            )
            .await
            .expect("send message");

        assert!(turn.context.handoff_requested());
        assert_eq!(turn.output.text, vec!["Let me look that up."]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn message_with_empty_reply_parses_to_defaults() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/workspaces/ws-1/message")
            .with_status(200)
            .with_body(r#"{"context":{}}"#)
            .create_async()
            .await;

        let turn = client(&server)
            .message(&WorkspaceId::new("ws-1"), "hi", DialogueContext::new())
            .await
            .expect("send message");

        assert!(turn.output.text.is_empty());
        assert!(!turn.context.handoff_requested());
    }
}
