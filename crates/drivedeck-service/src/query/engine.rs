//! The filter & sort engine.
//!
//! `apply` is pure and total: it reads snapshots of the folder and file
//! lists, never mutates its inputs, never fails for well-typed input,
//! and returns empty lists rather than erroring when nothing matches.
//! It is recomputed on every input change by the hosting view.

use chrono::{DateTime, Utc};

use drivedeck_core::types::filter::{OLDER_AFTER_ONE_YEAR, OLDER_AFTER_TWO_YEARS};
use drivedeck_core::types::{FilterSpec, SortSpec};
use drivedeck_entity::{File, Folder, StorageItem};

use crate::context::ViewContext;
use crate::query::sort;

/// Derives filtered and sorted listing views from item snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;

impl QueryEngine {
    /// Creates a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Applies the filter stages and optional sort to both lists,
    /// independently, in fixed order: search, category, last-modified,
    /// date-added, people, sort.
    pub fn apply(
        &self,
        folders: &[Folder],
        files: &[File],
        filter: &FilterSpec,
        sort_spec: Option<&SortSpec>,
        now: DateTime<Utc>,
        ctx: &ViewContext,
    ) -> (Vec<Folder>, Vec<File>) {
        let mut folders = self.filter_one(folders, filter, now, ctx);
        let mut files = self.filter_one(files, filter, now, ctx);
        if let Some(spec) = sort_spec {
            sort::sort_items(&mut folders, spec);
            sort::sort_items(&mut files, spec);
        }
        (folders, files)
    }

    /// Applies the filter stages to one list.
    pub fn filter_one<T: StorageItem + Clone>(
        &self,
        items: &[T],
        filter: &FilterSpec,
        now: DateTime<Utc>,
        ctx: &ViewContext,
    ) -> Vec<T> {
        let term = filter.search.trim().to_lowercase();
        items
            .iter()
            .filter(|item| term.is_empty() || Self::matches_search(*item, &term))
            .filter(|item| filter.category.matches(item.file_type()))
            .filter(|item| {
                filter
                    .last_modified
                    .matches(item.modified_at(), now, OLDER_AFTER_ONE_YEAR)
            })
            .filter(|item| {
                filter
                    .date_added
                    .matches(item.added_at(), now, OLDER_AFTER_TWO_YEARS)
            })
            .filter(|item| {
                filter
                    .people
                    .matches(item.owner_id(), item.shared_with(), ctx.user_id)
            })
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on name, owner name, and file
    /// type. The term is already trimmed and lowercased.
    fn matches_search<T: StorageItem>(item: &T, term: &str) -> bool {
        item.name().to_lowercase().contains(term)
            || item.owner_name().to_lowercase().contains(term)
            || item
                .file_type()
                .is_some_and(|ft| ft.to_lowercase().contains(term))
    }
}
