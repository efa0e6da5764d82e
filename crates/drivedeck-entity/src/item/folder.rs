//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drivedeck_core::types::{ItemId, UserId, WorkspaceId};

/// A folder in one universe of the item store.
///
/// `parent_id`, when present, references another folder in the same
/// universe; the chain forms a tree. `child_folder_ids` and `file_ids`
/// are denormalized for display and not authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier within its universe.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// The folder owner.
    pub owner_id: UserId,
    /// Owner display name (used for search and sorting only).
    pub owner_name: String,
    /// Human-readable size label, e.g. `"12 MB"`.
    pub size: String,
    /// When the folder was last modified.
    pub modified_at: Option<DateTime<Utc>>,
    /// When the folder was last opened.
    pub opened_at: Option<DateTime<Utc>>,
    /// When the folder was added.
    pub added_at: Option<DateTime<Utc>>,
    /// Number of people this folder is shared with.
    #[serde(default)]
    pub shared_with: u32,
    /// Whether the folder has been soft-deleted.
    #[serde(default)]
    pub trashed: bool,
    /// When the folder was moved to trash.
    pub trashed_at: Option<DateTime<Utc>>,
    /// The identifier the item carried in the trash universe, recorded on
    /// restore.
    pub original_id: Option<ItemId>,
    /// Color tag assigned in the dashboard.
    pub color_tag: Option<String>,
    /// Number of files contained in this folder.
    #[serde(default)]
    pub file_count: u32,
    /// Parent folder (None for root-level folders).
    pub parent_id: Option<ItemId>,
    /// Denormalized child folder identifiers.
    #[serde(default)]
    pub child_folder_ids: Vec<ItemId>,
    /// Denormalized contained file identifiers.
    #[serde(default)]
    pub file_ids: Vec<ItemId>,
    /// The workspace this folder belongs to.
    pub workspace_id: Option<WorkspaceId>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
