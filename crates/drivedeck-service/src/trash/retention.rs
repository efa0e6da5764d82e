//! The [`TrashService`]: retention-window math and empty-trash.

use chrono::{DateTime, Utc};
use tracing::info;

use drivedeck_core::config::TrashConfig;
use drivedeck_core::types::ItemId;
use drivedeck_entity::StorageItem;

use crate::store::ItemStore;

/// Retention accounting for the trash universe.
///
/// Permanent-deletion eligibility is a pure function of elapsed days from
/// `trashed_at`; "now" is always an explicit parameter.
#[derive(Debug, Clone)]
pub struct TrashService {
    config: TrashConfig,
}

impl TrashService {
    /// Creates a trash service with the given retention settings.
    pub fn new(config: TrashConfig) -> Self {
        Self { config }
    }

    /// The configured retention window in days.
    pub fn retention_days(&self) -> i64 {
        self.config.retention_days
    }

    /// Days remaining before an item trashed at `trashed_at` becomes
    /// eligible for permanent deletion. Zero once the retention window
    /// has elapsed; never negative.
    pub fn days_until_permanent_deletion(
        &self,
        trashed_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> i64 {
        let elapsed = (now - trashed_at).num_days();
        (self.config.retention_days - elapsed).clamp(0, self.config.retention_days)
    }

    /// Whether the retention window has fully elapsed.
    pub fn is_past_retention(&self, trashed_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.days_until_permanent_deletion(trashed_at, now) == 0
    }

    /// Ids of trashed items already past the retention window.
    pub fn purgeable_ids(&self, store: &ItemStore, now: DateTime<Utc>) -> Vec<ItemId> {
        let past = |trashed_at: Option<DateTime<Utc>>| {
            trashed_at.is_some_and(|ts| self.is_past_retention(ts, now))
        };
        let mut ids: Vec<ItemId> = store
            .folders(drivedeck_entity::Universe::Trashed)
            .iter()
            .filter(|f| past(f.trashed_at()))
            .map(|f| f.id)
            .collect();
        ids.extend(
            store
                .files(drivedeck_entity::Universe::Trashed)
                .iter()
                .filter(|f| past(f.trashed_at()))
                .map(|f| f.id),
        );
        ids
    }

    /// Permanently removes everything in the trash universe.
    ///
    /// Destructive and unrecoverable, so the caller must pass an explicit
    /// confirmation; unconfirmed calls are a no-op returning zero.
    pub fn empty_trash(&self, store: &mut ItemStore, confirmed: bool) -> usize {
        if !confirmed {
            return 0;
        }
        let removed = store.clear_trash();
        info!(removed, "Trash emptied");
        removed
    }
}

impl Default for TrashService {
    fn default() -> Self {
        Self::new(TrashConfig::default())
    }
}
