//! One-time workspace resolution.
//!
//! The dialogue engine needs a workspace id on every message call. The
//! resolver tries the configured candidate first, falls back to the first
//! workspace the service lists, and caches whichever id it adopts for the
//! life of the process. Resolution failures leave the cell empty so the
//! next inbound message retries; a resolved id is never revisited.

use crate::client::DialogueService;
use crate::error::DialogueError;
use copper_courier_core::WorkspaceId;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Resolves and caches the workspace id used for dialogue calls.
#[derive(Debug)]
pub struct WorkspaceResolver {
    candidate: Option<WorkspaceId>,
    resolved: OnceCell<WorkspaceId>,
}

impl WorkspaceResolver {
    /// Creates a resolver with an optional configured candidate id.
    #[must_use]
    pub fn new(candidate: Option<WorkspaceId>) -> Self {
        Self {
            candidate,
            resolved: OnceCell::new(),
        }
    }

    /// Returns the adopted workspace id, if resolution has completed.
    #[must_use]
    pub fn resolved(&self) -> Option<&WorkspaceId> {
        self.resolved.get()
    }

    /// Returns the workspace id, resolving it on first use.
    ///
    /// Concurrent callers coalesce on a single resolution attempt. Returns
    /// `None` when both the candidate lookup and the list fallback fail;
    /// the failure is logged and the next call retries.
    pub async fn resolve<S>(&self, service: &S) -> Option<WorkspaceId>
    where
        S: DialogueService + ?Sized,
    {
        match self
            .resolved
            .get_or_try_init(|| discover(self.candidate.as_ref(), service))
            .await
        {
            Ok(id) => Some(id.clone()),
            Err(e) => {
                warn!(error = %e, "workspace resolution failed");
                None
            }
        }
    }
}

/// Picks the workspace to adopt: the configured candidate if the service
/// knows it, otherwise the first listed workspace.
async fn discover<S>(
    candidate: Option<&WorkspaceId>,
    service: &S,
) -> Result<WorkspaceId, DialogueError>
where
    S: DialogueService + ?Sized,
{
    if let Some(id) = candidate {
        match service.workspace(id).await {
            Ok(workspace) => {
                info!(
                    name = %workspace.name,
                    id = %workspace.workspace_id,
                    "using configured workspace"
                );
                return Ok(workspace.workspace_id);
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "configured workspace lookup failed, listing available workspaces"
                );
            }
        }
    }

    let first = service
        .list_workspaces()
        .await?
        .into_iter()
        .next()
        .ok_or(DialogueError::NoWorkspaces)?;

    info!(
        name = %first.name,
        id = %first.workspace_id,
        "adopted first available workspace"
    );
    Ok(first.workspace_id)
}
