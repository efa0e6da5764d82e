//! The [`PathResolver`]: walks parent links to build root-to-leaf
//! breadcrumb trails.

use std::collections::HashSet;

use tracing::warn;

use drivedeck_core::config::ResolverConfig;
use drivedeck_core::types::ItemId;
use drivedeck_core::{AppError, AppResult};
use drivedeck_entity::{Crumb, Folder, Universe};

use crate::context::ViewContext;
use crate::store::ItemStore;

/// Resolves breadcrumb paths within one universe's visible folder set.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    config: ResolverConfig,
}

impl PathResolver {
    /// Creates a resolver with the given settings.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolves the breadcrumb trail for a folder, root to leaf, starting
    /// with the universe's synthetic root crumb.
    ///
    /// The walk follows `parent_id` upward until a folder has no parent
    /// or the parent is not visible in the universe. It is bounded by a
    /// visited set and a maximum depth: a parent cycle truncates the
    /// trail rather than looping or failing, since a breadcrumb is a
    /// render path. An unresolvable `folder_id` yields a not-found error
    /// so the caller can redirect to the universe root.
    pub fn resolve(
        &self,
        store: &ItemStore,
        folder_id: ItemId,
        universe: Universe,
        ctx: &ViewContext,
    ) -> AppResult<Vec<Crumb>> {
        let start = self
            .lookup(store, folder_id, universe, ctx)
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Folder {folder_id} not found in {universe:?} universe"
                ))
            })?;

        let mut crumbs = vec![Crumb::new(start.id, start.name.clone())];
        let mut visited: HashSet<ItemId> = HashSet::from([start.id]);
        let mut current = start.parent_id;

        while let Some(parent_id) = current {
            if crumbs.len() >= self.config.max_depth {
                warn!(folder_id = %folder_id, "Breadcrumb walk exceeded max depth; truncating");
                break;
            }
            if !visited.insert(parent_id) {
                warn!(
                    folder_id = %folder_id,
                    cycle_at = %parent_id,
                    "Parent cycle detected in breadcrumb walk; truncating"
                );
                break;
            }
            // A parent missing from the universe's visible set ends the
            // walk; the trail simply starts deeper.
            let Some(parent) = self.lookup(store, parent_id, universe, ctx) else {
                break;
            };
            crumbs.insert(0, Crumb::new(parent.id, parent.name.clone()));
            current = parent.parent_id;
        }

        crumbs.insert(0, universe.root_crumb());
        Ok(crumbs)
    }

    /// Looks up a folder under the universe's visibility rules.
    fn lookup<'a>(
        &self,
        store: &'a ItemStore,
        id: ItemId,
        universe: Universe,
        ctx: &ViewContext,
    ) -> Option<&'a Folder> {
        match universe {
            Universe::Owned => store.find_folder(Universe::Owned, id),
            Universe::Trashed => store.find_folder(Universe::Trashed, id),
            Universe::Shared => store.find_shared_visible_folder(id, ctx),
        }
    }
}
