//! Newtype wrappers for all domain identifiers.
//!
//! Using distinct types prevents accidentally passing a `UserId` where an
//! `ItemId` is expected. Folders and files share the single `ItemId`
//! namespace because selection treats them uniformly; the owned, shared,
//! and trashed universes are independent namespaces for that id space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around an inner identifier type.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $inner:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Return the inner identifier value.
            pub fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(inner: $inner) -> Self {
                Self(inner)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a folder or file within one universe.
    ItemId,
    u64
);

define_id!(
    /// Unique identifier for a user.
    UserId,
    Uuid
);

define_id!(
    /// Unique identifier for a workspace.
    WorkspaceId,
    Uuid
);

impl ItemId {
    /// The synthetic identifier used for universe root breadcrumbs.
    pub const ROOT: ItemId = ItemId(0);
}

impl UserId {
    /// Create a new random user identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceId {
    /// Create a new random workspace identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorkspaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl FromStr for WorkspaceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
