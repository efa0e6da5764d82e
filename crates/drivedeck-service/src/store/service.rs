//! The [`ItemStore`]: owner of the in-memory folder and file collections.

use drivedeck_core::types::ItemId;
use drivedeck_entity::{File, Folder, Universe};

use crate::context::ViewContext;

/// The in-memory collection of folders and files across the three
/// universes.
///
/// The store is exclusively owned by the hosting view and mutated only
/// through the action dispatcher. Identifier namespaces are independent
/// per universe. The query engine and breadcrumb resolver read snapshots
/// and never mutate.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    owned_folders: Vec<Folder>,
    owned_files: Vec<File>,
    shared_folders: Vec<Folder>,
    shared_files: Vec<File>,
    trashed_folders: Vec<Folder>,
    trashed_files: Vec<File>,
}

impl ItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of one universe with the given lists.
    pub fn load(&mut self, universe: Universe, folders: Vec<Folder>, files: Vec<File>) {
        match universe {
            Universe::Owned => {
                self.owned_folders = folders;
                self.owned_files = files;
            }
            Universe::Shared => {
                self.shared_folders = folders;
                self.shared_files = files;
            }
            Universe::Trashed => {
                self.trashed_folders = folders;
                self.trashed_files = files;
            }
        }
    }

    /// The folders of a universe.
    pub fn folders(&self, universe: Universe) -> &[Folder] {
        match universe {
            Universe::Owned => &self.owned_folders,
            Universe::Shared => &self.shared_folders,
            Universe::Trashed => &self.trashed_folders,
        }
    }

    /// The files of a universe.
    pub fn files(&self, universe: Universe) -> &[File] {
        match universe {
            Universe::Owned => &self.owned_files,
            Universe::Shared => &self.shared_files,
            Universe::Trashed => &self.trashed_files,
        }
    }

    fn folders_mut(&mut self, universe: Universe) -> &mut Vec<Folder> {
        match universe {
            Universe::Owned => &mut self.owned_folders,
            Universe::Shared => &mut self.shared_folders,
            Universe::Trashed => &mut self.trashed_folders,
        }
    }

    fn files_mut(&mut self, universe: Universe) -> &mut Vec<File> {
        match universe {
            Universe::Owned => &mut self.owned_files,
            Universe::Shared => &mut self.shared_files,
            Universe::Trashed => &mut self.trashed_files,
        }
    }

    /// Finds a folder by id within a universe.
    pub fn find_folder(&self, universe: Universe, id: ItemId) -> Option<&Folder> {
        self.folders(universe).iter().find(|f| f.id == id)
    }

    /// Finds a file by id within a universe.
    pub fn find_file(&self, universe: Universe, id: ItemId) -> Option<&File> {
        self.files(universe).iter().find(|f| f.id == id)
    }

    /// Whether any item (folder or file) with the id exists in the universe.
    pub fn contains(&self, universe: Universe, id: ItemId) -> bool {
        self.find_folder(universe, id).is_some() || self.find_file(universe, id).is_some()
    }

    pub(crate) fn find_folder_mut(&mut self, universe: Universe, id: ItemId) -> Option<&mut Folder> {
        self.folders_mut(universe).iter_mut().find(|f| f.id == id)
    }

    pub(crate) fn find_file_mut(&mut self, universe: Universe, id: ItemId) -> Option<&mut File> {
        self.files_mut(universe).iter_mut().find(|f| f.id == id)
    }

    /// Removes and returns a folder from a universe.
    pub(crate) fn remove_folder(&mut self, universe: Universe, id: ItemId) -> Option<Folder> {
        let folders = self.folders_mut(universe);
        let idx = folders.iter().position(|f| f.id == id)?;
        Some(folders.remove(idx))
    }

    /// Removes and returns a file from a universe.
    pub(crate) fn remove_file(&mut self, universe: Universe, id: ItemId) -> Option<File> {
        let files = self.files_mut(universe);
        let idx = files.iter().position(|f| f.id == id)?;
        Some(files.remove(idx))
    }

    /// Inserts a folder into a universe.
    pub(crate) fn insert_folder(&mut self, universe: Universe, folder: Folder) {
        self.folders_mut(universe).push(folder);
    }

    /// Inserts a file into a universe.
    pub(crate) fn insert_file(&mut self, universe: Universe, file: File) {
        self.files_mut(universe).push(file);
    }

    /// Drops everything in the trash universe.
    pub(crate) fn clear_trash(&mut self) -> usize {
        let count = self.trashed_folders.len() + self.trashed_files.len();
        self.trashed_folders.clear();
        self.trashed_files.clear();
        count
    }

    /// The folders visible in the Shared universe for the given user:
    /// the dedicated shared set plus owned folders with a share count,
    /// always excluding the requesting user's own items.
    pub fn visible_shared_folders(&self, ctx: &ViewContext) -> Vec<Folder> {
        let mut visible: Vec<Folder> = self
            .shared_folders
            .iter()
            .filter(|f| f.owner_id != ctx.user_id)
            .cloned()
            .collect();
        visible.extend(
            self.owned_folders
                .iter()
                .filter(|f| f.shared_with > 0 && f.owner_id != ctx.user_id)
                .cloned(),
        );
        visible
    }

    /// The files visible in the Shared universe for the given user.
    pub fn visible_shared_files(&self, ctx: &ViewContext) -> Vec<File> {
        let mut visible: Vec<File> = self
            .shared_files
            .iter()
            .filter(|f| f.owner_id != ctx.user_id)
            .cloned()
            .collect();
        visible.extend(
            self.owned_files
                .iter()
                .filter(|f| f.shared_with > 0 && f.owner_id != ctx.user_id)
                .cloned(),
        );
        visible
    }

    /// Looks up a folder in the Shared universe under the visibility
    /// rules: the dedicated shared set first, then the owned set filtered
    /// to shared items not owned by the requesting user.
    pub fn find_shared_visible_folder(&self, id: ItemId, ctx: &ViewContext) -> Option<&Folder> {
        self.shared_folders
            .iter()
            .find(|f| f.id == id && f.owner_id != ctx.user_id)
            .or_else(|| {
                self.owned_folders
                    .iter()
                    .find(|f| f.id == id && f.shared_with > 0 && f.owner_id != ctx.user_id)
            })
    }

    /// Total number of items in a universe.
    pub fn universe_len(&self, universe: Universe) -> usize {
        self.folders(universe).len() + self.files(universe).len()
    }
}
