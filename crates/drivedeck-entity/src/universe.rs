//! The three disjoint item collections a dashboard view can show.

use serde::{Deserialize, Serialize};

use crate::crumb::Crumb;
use drivedeck_core::types::ItemId;

/// One of the three disjoint item collections.
///
/// Universes are independent identifier namespaces: an `ItemId` only has
/// meaning within the universe it was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Universe {
    /// Items owned by the current user (the active collection).
    Owned,
    /// Items visible because someone else shared them.
    Shared,
    /// Soft-deleted items awaiting restore or permanent deletion.
    Trashed,
}

impl Universe {
    /// The label of this universe's synthetic root breadcrumb.
    pub fn root_label(self) -> &'static str {
        match self {
            Self::Owned => "All Folders",
            Self::Shared => "Shared with me",
            Self::Trashed => "Trash",
        }
    }

    /// The synthetic root breadcrumb for this universe.
    pub fn root_crumb(self) -> Crumb {
        Crumb {
            id: ItemId::ROOT,
            name: self.root_label().to_string(),
        }
    }

    /// Whether items in this universe are active (not soft-deleted).
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Trashed)
    }
}
