//! Breadcrumb value object.

use serde::{Deserialize, Serialize};

use drivedeck_core::types::ItemId;

/// One entry in a breadcrumb path, ordered root to leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crumb {
    /// The folder identifier, or [`ItemId::ROOT`] for the synthetic
    /// universe root.
    pub id: ItemId,
    /// Display name.
    pub name: String,
}

impl Crumb {
    /// Create a new crumb.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
