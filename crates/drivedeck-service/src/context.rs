//! View context carrying the current user and workspace identity.

use serde::{Deserialize, Serialize};

use drivedeck_core::types::{UserId, WorkspaceId};
use drivedeck_entity::Workspace;

/// Context for the current dashboard view.
///
/// Constructed once per view mount from the session collaborator and
/// passed into the engine, dispatcher, and resolver explicitly — the core
/// never reaches into ambient global state itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewContext {
    /// The current user's ID.
    pub user_id: UserId,
    /// The current user's display name.
    pub user_name: String,
    /// The workspace the view is scoped to.
    pub workspace_id: WorkspaceId,
    /// Workspaces the user can switch into.
    pub workspaces: Vec<Workspace>,
}

impl ViewContext {
    /// Creates a new view context.
    pub fn new(
        user_id: UserId,
        user_name: impl Into<String>,
        workspace_id: WorkspaceId,
        workspaces: Vec<Workspace>,
    ) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            workspace_id,
            workspaces,
        }
    }

    /// Whether the given workspace is accessible to the current user.
    pub fn can_access(&self, workspace_id: WorkspaceId) -> bool {
        self.workspace_id == workspace_id || self.workspaces.iter().any(|w| w.id == workspace_id)
    }
}
