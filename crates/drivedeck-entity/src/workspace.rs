//! Workspace descriptor.

use serde::{Deserialize, Serialize};

use drivedeck_core::types::WorkspaceId;

/// A workspace the current user can switch into.
///
/// The core treats workspaces as opaque context: it never manages their
/// storage or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Workspace identifier.
    pub id: WorkspaceId,
    /// Display name.
    pub name: String,
}

impl Workspace {
    /// Create a new workspace descriptor.
    pub fn new(id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
