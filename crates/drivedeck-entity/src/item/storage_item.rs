//! The [`StorageItem`] trait: the seam through which the query engine,
//! dispatcher, and retention logic treat folders and files uniformly.

use chrono::{DateTime, Utc};

use drivedeck_core::types::{ItemId, UserId};

use super::{File, Folder};

/// Uniform access to the fields shared by folders and files.
///
/// Folders report `file_type() == None`, which is what the category
/// filter and file-type sort key use to tell the two kinds apart.
pub trait StorageItem {
    /// Item identifier.
    fn id(&self) -> ItemId;
    /// Display name.
    fn name(&self) -> &str;
    /// Owner identifier.
    fn owner_id(&self) -> UserId;
    /// Owner display name.
    fn owner_name(&self) -> &str;
    /// Human-readable size label.
    fn size_label(&self) -> &str;
    /// Last-modified timestamp.
    fn modified_at(&self) -> Option<DateTime<Utc>>;
    /// Last-opened timestamp.
    fn opened_at(&self) -> Option<DateTime<Utc>>;
    /// Date-added timestamp.
    fn added_at(&self) -> Option<DateTime<Utc>>;
    /// Number of people the item is shared with.
    fn shared_with(&self) -> u32;
    /// When the item was moved to trash, if it was.
    fn trashed_at(&self) -> Option<DateTime<Utc>>;
    /// File extension for files, `None` for folders.
    fn file_type(&self) -> Option<&str>;

    /// Update the display name in place.
    fn rename(&mut self, new_name: String);
    /// Flag the item as trashed at the given instant.
    fn mark_trashed(&mut self, now: DateTime<Utc>);
    /// Clear the trashed flag, recording the trash-universe identifier.
    fn clear_trashed(&mut self, original_id: ItemId);

    /// Numeric size extracted from the size label, for sorting.
    fn size_value(&self) -> f64 {
        parse_size_label(self.size_label())
    }
}

/// Extract the numeric component of a human-readable size label.
///
/// `"12 MB"` yields `12.0`, `"1.5 GB"` yields `1.5`. Labels with no
/// parseable number degrade to `0.0` so size sorting never fails.
pub fn parse_size_label(label: &str) -> f64 {
    let numeric: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse::<f64>().unwrap_or(0.0)
}

impl StorageItem for Folder {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn owner_id(&self) -> UserId {
        self.owner_id
    }

    fn owner_name(&self) -> &str {
        &self.owner_name
    }

    fn size_label(&self) -> &str {
        &self.size
    }

    fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    fn opened_at(&self) -> Option<DateTime<Utc>> {
        self.opened_at
    }

    fn added_at(&self) -> Option<DateTime<Utc>> {
        self.added_at
    }

    fn shared_with(&self) -> u32 {
        self.shared_with
    }

    fn trashed_at(&self) -> Option<DateTime<Utc>> {
        self.trashed_at
    }

    fn file_type(&self) -> Option<&str> {
        None
    }

    fn rename(&mut self, new_name: String) {
        self.name = new_name;
    }

    fn mark_trashed(&mut self, now: DateTime<Utc>) {
        self.trashed = true;
        self.trashed_at = Some(now);
    }

    fn clear_trashed(&mut self, original_id: ItemId) {
        self.trashed = false;
        self.trashed_at = None;
        self.original_id = Some(original_id);
        // Reinstated at the universe root; the pre-trash parent may no
        // longer exist.
        self.parent_id = None;
    }
}

impl StorageItem for File {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn owner_id(&self) -> UserId {
        self.owner_id
    }

    fn owner_name(&self) -> &str {
        &self.owner_name
    }

    fn size_label(&self) -> &str {
        &self.size
    }

    fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    fn opened_at(&self) -> Option<DateTime<Utc>> {
        self.opened_at
    }

    fn added_at(&self) -> Option<DateTime<Utc>> {
        self.added_at
    }

    fn shared_with(&self) -> u32 {
        self.shared_with
    }

    fn trashed_at(&self) -> Option<DateTime<Utc>> {
        self.trashed_at
    }

    fn file_type(&self) -> Option<&str> {
        Some(&self.file_type)
    }

    fn rename(&mut self, new_name: String) {
        self.name = new_name;
    }

    fn mark_trashed(&mut self, now: DateTime<Utc>) {
        self.trashed = true;
        self.trashed_at = Some(now);
    }

    fn clear_trashed(&mut self, original_id: ItemId) {
        self.trashed = false;
        self.trashed_at = None;
        self.original_id = Some(original_id);
        self.folder_id = None;
    }
}
