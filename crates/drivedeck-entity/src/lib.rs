//! # drivedeck-entity
//!
//! Domain entity models for DriveDeck. Every struct in this crate is a
//! plain value object: the dashboard's item records, the universe and
//! breadcrumb types, and the workspace descriptor. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`, serialized in the
//! camelCase shape the dashboard exchanges.

pub mod crumb;
pub mod item;
pub mod universe;
pub mod workspace;

pub use crumb::Crumb;
pub use item::{parse_size_label, File, Folder, StorageItem};
pub use universe::Universe;
pub use workspace::Workspace;
