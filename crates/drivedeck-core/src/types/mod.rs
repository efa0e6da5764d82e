//! Shared value types: typed identifiers, filter specifications, sorting.

pub mod filter;
pub mod id;
pub mod sorting;

pub use filter::{CategoryFilter, FilterSpec, PeopleFilter, RecencyFilter};
pub use id::{ItemId, UserId, WorkspaceId};
pub use sorting::{SortDirection, SortKey, SortSpec};
