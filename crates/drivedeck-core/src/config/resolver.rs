//! Breadcrumb resolver configuration.

use serde::{Deserialize, Serialize};

/// Breadcrumb resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum number of parent hops before a walk is truncated. Guards
    /// against corrupt parent links forming a cycle.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    64
}
