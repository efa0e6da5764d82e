//! Sorting types for the dashboard item listings.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

/// The item field a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Display name.
    Name,
    /// Owner display name.
    Owner,
    /// Human-readable size label, compared numerically.
    Size,
    /// File extension (folders sort last).
    FileType,
    /// Last-modified timestamp.
    LastModified,
    /// Last-opened timestamp.
    LastOpened,
    /// Date-added timestamp.
    DateAdded,
    /// Shared-with count.
    SharedWith,
}

impl SortKey {
    /// Parse a UI sort code. Unknown codes yield `None`, which the engine
    /// treats as "leave the listing unsorted".
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "name" => Some(Self::Name),
            "owner" => Some(Self::Owner),
            "size" => Some(Self::Size),
            "file_type" => Some(Self::FileType),
            "last_modified" => Some(Self::LastModified),
            "last_opened" => Some(Self::LastOpened),
            "date_added" => Some(Self::DateAdded),
            "shared_with" => Some(Self::SharedWith),
            _ => None,
        }
    }
}

/// A sort specification: a key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The field to sort by.
    pub key: SortKey,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a new sort specification.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Create an ascending sort on the given key.
    pub fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Create a descending sort on the given key.
    pub fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// The same spec with the opposite direction.
    pub fn reversed(self) -> Self {
        let direction = match self.direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
        Self::new(self.key, direction)
    }
}
