//! Item entity models: folders, files, and the [`StorageItem`] seam the
//! query engine and dispatcher operate through.

pub mod file;
pub mod folder;
pub mod storage_item;

pub use file::File;
pub use folder::Folder;
pub use storage_item::{parse_size_label, StorageItem};
