//! Seeded fixture data for the demo binary and tests.
//!
//! Identifiers are fixed so fixtures stay deterministic across runs. All
//! timestamps are derived from the caller-supplied "now" so recency
//! buckets behave the same whenever the fixture is built.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use drivedeck_core::types::{ItemId, UserId, WorkspaceId};
use drivedeck_entity::{File, Folder, Universe, Workspace};

use crate::context::ViewContext;
use crate::store::ItemStore;

/// The fixture's current user.
pub fn current_user() -> UserId {
    UserId(Uuid::from_u128(0x01))
}

/// A colleague who shares items with the current user.
pub fn colleague() -> UserId {
    UserId(Uuid::from_u128(0x02))
}

/// A second colleague.
pub fn second_colleague() -> UserId {
    UserId(Uuid::from_u128(0x03))
}

/// The fixture view context.
pub fn sample_context() -> ViewContext {
    let primary = WorkspaceId(Uuid::from_u128(0x10));
    ViewContext::new(
        current_user(),
        "Avery Chen",
        primary,
        vec![
            Workspace::new(primary, "Acme Workspace"),
            Workspace::new(WorkspaceId(Uuid::from_u128(0x11)), "Personal"),
        ],
    )
}

/// Builds the sample store and matching view context.
pub fn sample_store(now: DateTime<Utc>) -> (ItemStore, ViewContext) {
    let ctx = sample_context();
    let me = current_user();
    let workspace = Some(ctx.workspace_id);

    let owned_folders = vec![
        folder(1, "Projects", me, "Avery Chen", "45 MB", now - Duration::days(2), None, 0, workspace),
        folder(2, "Design", me, "Avery Chen", "30 MB", now - Duration::days(5), Some(1), 3, workspace),
        folder(3, "Mockups", me, "Avery Chen", "18 MB", now - Duration::days(1), Some(2), 0, workspace),
        folder(4, "Finance", me, "Avery Chen", "210 MB", now - Duration::days(90), None, 0, workspace),
    ];

    let owned_files = vec![
        file(11, "quarterly-report.pdf", "pdf", me, "Avery Chen", "3 MB", now - Duration::days(2), Some(4), 2, workspace),
        file(12, "team-photo.png", "png", me, "Avery Chen", "12 MB", now - Duration::hours(3), Some(2), 0, workspace),
        file(13, "budget.xlsx", "xlsx", me, "Avery Chen", "156 MB", now - Duration::days(40), Some(4), 1, workspace),
        file(14, "meeting-notes.txt", "txt", me, "Avery Chen", "1 MB", now - Duration::days(400), None, 0, workspace),
        file(15, "product-demo.mp4", "mp4", me, "Avery Chen", "1.5 GB", now - Duration::days(12), Some(1), 0, workspace),
    ];

    let shared_folders = vec![
        folder(21, "Campaign Assets", colleague(), "Riya Kapoor", "520 MB", now - Duration::days(3), None, 5, workspace),
        folder(22, "Briefs", colleague(), "Riya Kapoor", "8 MB", now - Duration::days(1), Some(21), 5, workspace),
    ];

    let shared_files = vec![
        file(31, "launch-plan.docx", "docx", colleague(), "Riya Kapoor", "2 MB", now - Duration::days(1), Some(22), 5, workspace),
        file(32, "logo.svg", "svg", second_colleague(), "Tom Okafor", "1 MB", now - Duration::days(800), Some(21), 2, workspace),
    ];

    let trashed_folders = vec![trashed_folder(
        41,
        "Old Projects",
        me,
        "Avery Chen",
        "95 MB",
        now - Duration::days(10),
        workspace,
    )];

    let trashed_files = vec![
        trashed_file(51, "draft.txt", "txt", me, "Avery Chen", "1 MB", now - Duration::days(35), workspace),
        trashed_file(52, "old-banner.jpg", "jpg", me, "Avery Chen", "4 MB", now - Duration::days(5), workspace),
    ];

    let mut store = ItemStore::new();
    store.load(Universe::Owned, owned_folders, owned_files);
    store.load(Universe::Shared, shared_folders, shared_files);
    store.load(Universe::Trashed, trashed_folders, trashed_files);

    (store, ctx)
}

#[allow(clippy::too_many_arguments)]
fn folder(
    id: u64,
    name: &str,
    owner_id: UserId,
    owner_name: &str,
    size: &str,
    modified_at: DateTime<Utc>,
    parent_id: Option<u64>,
    shared_with: u32,
    workspace_id: Option<WorkspaceId>,
) -> Folder {
    Folder {
        id: ItemId(id),
        name: name.to_string(),
        owner_id,
        owner_name: owner_name.to_string(),
        size: size.to_string(),
        modified_at: Some(modified_at),
        opened_at: Some(modified_at),
        added_at: Some(modified_at - Duration::days(30)),
        shared_with,
        trashed: false,
        trashed_at: None,
        original_id: None,
        color_tag: None,
        file_count: 0,
        parent_id: parent_id.map(ItemId),
        child_folder_ids: Vec::new(),
        file_ids: Vec::new(),
        workspace_id,
    }
}

#[allow(clippy::too_many_arguments)]
fn file(
    id: u64,
    name: &str,
    file_type: &str,
    owner_id: UserId,
    owner_name: &str,
    size: &str,
    modified_at: DateTime<Utc>,
    folder_id: Option<u64>,
    shared_with: u32,
    workspace_id: Option<WorkspaceId>,
) -> File {
    File {
        id: ItemId(id),
        name: name.to_string(),
        owner_id,
        owner_name: owner_name.to_string(),
        size: size.to_string(),
        modified_at: Some(modified_at),
        opened_at: None,
        added_at: Some(modified_at - Duration::days(10)),
        shared_with,
        trashed: false,
        trashed_at: None,
        original_id: None,
        color_tag: None,
        file_type: file_type.to_string(),
        folder_id: folder_id.map(ItemId),
        workspace_id,
    }
}

#[allow(clippy::too_many_arguments)]
fn trashed_folder(
    id: u64,
    name: &str,
    owner_id: UserId,
    owner_name: &str,
    size: &str,
    trashed_at: DateTime<Utc>,
    workspace_id: Option<WorkspaceId>,
) -> Folder {
    let mut f = folder(id, name, owner_id, owner_name, size, trashed_at, None, 0, workspace_id);
    f.trashed = true;
    f.trashed_at = Some(trashed_at);
    f
}

#[allow(clippy::too_many_arguments)]
fn trashed_file(
    id: u64,
    name: &str,
    file_type: &str,
    owner_id: UserId,
    owner_name: &str,
    size: &str,
    trashed_at: DateTime<Utc>,
    workspace_id: Option<WorkspaceId>,
) -> File {
    let mut f = file(id, name, file_type, owner_id, owner_name, size, trashed_at, None, 0, workspace_id);
    f.trashed = true;
    f.trashed_at = Some(trashed_at);
    f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_store_universes() {
        let now = Utc::now();
        let (store, ctx) = sample_store(now);
        assert_eq!(store.universe_len(Universe::Owned), 9);
        assert_eq!(store.universe_len(Universe::Shared), 4);
        assert_eq!(store.universe_len(Universe::Trashed), 3);
        assert_eq!(ctx.user_id, current_user());
    }

    #[test]
    fn test_own_items_never_visible_in_shared() {
        let now = Utc::now();
        let (store, ctx) = sample_store(now);
        // Folder 2 is owned by the current user with shared_with > 0.
        let visible = store.visible_shared_folders(&ctx);
        assert!(visible.iter().all(|f| f.owner_id != ctx.user_id));
    }
}
