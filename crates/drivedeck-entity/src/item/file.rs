//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drivedeck_core::types::{ItemId, UserId, WorkspaceId};

/// A file in one universe of the item store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier within its universe.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// The file owner.
    pub owner_id: UserId,
    /// Owner display name (used for search and sorting only).
    pub owner_name: String,
    /// Human-readable size label, e.g. `"3 MB"`.
    pub size: String,
    /// When the file was last modified.
    pub modified_at: Option<DateTime<Utc>>,
    /// When the file was last opened.
    pub opened_at: Option<DateTime<Utc>>,
    /// When the file was added.
    pub added_at: Option<DateTime<Utc>>,
    /// Number of people this file is shared with.
    #[serde(default)]
    pub shared_with: u32,
    /// Whether the file has been soft-deleted.
    #[serde(default)]
    pub trashed: bool,
    /// When the file was moved to trash.
    pub trashed_at: Option<DateTime<Utc>>,
    /// The identifier the item carried in the trash universe, recorded on
    /// restore.
    pub original_id: Option<ItemId>,
    /// Color tag assigned in the dashboard.
    pub color_tag: Option<String>,
    /// File type / extension string, e.g. `"pdf"`.
    pub file_type: String,
    /// The folder containing this file (None for top-level files).
    pub folder_id: Option<ItemId>,
    /// The workspace this file belongs to.
    pub workspace_id: Option<WorkspaceId>,
}

impl File {
    /// The file extension, lowercased.
    pub fn extension(&self) -> String {
        self.file_type.to_lowercase()
    }
}
