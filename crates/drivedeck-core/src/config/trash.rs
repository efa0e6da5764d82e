//! Trash retention configuration.

use serde::{Deserialize, Serialize};

/// Trash retention settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashConfig {
    /// Number of days a trashed item remains recoverable before it becomes
    /// eligible for permanent deletion.
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
        }
    }
}

fn default_retention_days() -> i64 {
    30
}
