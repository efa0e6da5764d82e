//! The [`Dispatcher`]: maps user actions to synchronous item-store
//! mutations.
//!
//! Every recognized action is acknowledged; only rename, delete, and
//! restore mutate state. Share, copy, save-as, move, and info are
//! placeholders the dashboard surfaces but does not persist — the
//! distinction between "recognized and acknowledged" and "recognized and
//! persisted" is part of the contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use drivedeck_core::types::ItemId;
use drivedeck_core::AppError;
use drivedeck_core::AppResult;
use drivedeck_entity::{StorageItem, Universe};

use crate::context::ViewContext;
use crate::store::ItemStore;
use crate::trash::TrashService;

/// A discrete user action targeting one item (or a batch of items).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionType {
    /// Rename the item in place.
    Rename {
        /// The new display name.
        new_name: String,
    },
    /// Move to trash in active universes; permanently delete in the
    /// trash universe.
    Delete,
    /// Reinstate a trashed item into the owned universe.
    Restore,
    /// Placeholder: share dialog.
    Share,
    /// Placeholder: duplicate the item.
    Copy,
    /// Placeholder: save a copy under a new name.
    SaveAs,
    /// Placeholder: move to another folder.
    Move,
    /// Placeholder: details panel.
    Info,
}

impl ActionType {
    /// Whether this action mutates the store when dispatched.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Rename { .. } | Self::Delete | Self::Restore)
    }
}

/// The result of dispatching a single action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The store was mutated and views should recompute.
    Mutated,
    /// The action is a recognized placeholder; nothing changed.
    Acknowledged,
    /// The action was declined without mutating (e.g. empty rename).
    Declined,
    /// A permanent deletion needs explicit confirmation first.
    ConfirmationRequired {
        /// Whether the item is already past the retention window, which
        /// drives the extra warning prompt.
        past_retention: bool,
    },
}

/// Aggregate result of a bulk dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    /// Items whose dispatch mutated the store.
    pub mutated: usize,
    /// Items acknowledged without mutation.
    pub acknowledged: usize,
    /// Items declined without mutation.
    pub declined: usize,
    /// Items awaiting confirmation.
    pub confirmation_required: usize,
    /// Ids that did not resolve in the target universe.
    pub not_found: usize,
}

/// Dispatches actions against the item store.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    trash: TrashService,
}

impl Dispatcher {
    /// Creates a dispatcher with the given trash service.
    pub fn new(trash: TrashService) -> Self {
        Self { trash }
    }

    /// Dispatches one action against one item.
    ///
    /// `confirmed` acknowledges destructive prompts; it is only consulted
    /// for permanent deletion. Returns a not-found error when the id does
    /// not resolve in the universe, which the caller treats as a redirect
    /// to the universe root rather than a fatal failure.
    pub fn dispatch(
        &self,
        store: &mut ItemStore,
        universe: Universe,
        id: ItemId,
        action: ActionType,
        confirmed: bool,
        now: DateTime<Utc>,
        ctx: &ViewContext,
    ) -> AppResult<ActionOutcome> {
        match action {
            ActionType::Rename { new_name } => self.rename(store, universe, id, new_name, ctx),
            ActionType::Delete if universe.is_active() => {
                self.move_to_trash(store, universe, id, now, ctx)
            }
            ActionType::Delete => self.delete_permanently(store, id, confirmed, now, ctx),
            ActionType::Restore => self.restore(store, universe, id, ctx),
            placeholder => {
                if !store.contains(universe, id) {
                    return Err(AppError::not_found(format!(
                        "Item {id} not found in {universe:?} universe"
                    )));
                }
                debug!(
                    user_id = %ctx.user_id,
                    item_id = %id,
                    action = ?placeholder,
                    "Action acknowledged without mutation"
                );
                Ok(ActionOutcome::Acknowledged)
            }
        }
    }

    /// Dispatches one action across a batch of ids, skipping ids that do
    /// not resolve.
    pub fn dispatch_bulk(
        &self,
        store: &mut ItemStore,
        universe: Universe,
        ids: &[ItemId],
        action: &ActionType,
        confirmed: bool,
        now: DateTime<Utc>,
        ctx: &ViewContext,
    ) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();
        for id in ids {
            match self.dispatch(store, universe, *id, action.clone(), confirmed, now, ctx) {
                Ok(ActionOutcome::Mutated) => outcome.mutated += 1,
                Ok(ActionOutcome::Acknowledged) => outcome.acknowledged += 1,
                Ok(ActionOutcome::Declined) => outcome.declined += 1,
                Ok(ActionOutcome::ConfirmationRequired { .. }) => {
                    outcome.confirmation_required += 1
                }
                Err(e) if e.is_not_found() => outcome.not_found += 1,
                Err(_) => outcome.declined += 1,
            }
        }
        outcome
    }

    fn rename(
        &self,
        store: &mut ItemStore,
        universe: Universe,
        id: ItemId,
        new_name: String,
        ctx: &ViewContext,
    ) -> AppResult<ActionOutcome> {
        if new_name.trim().is_empty() {
            return Ok(ActionOutcome::Declined);
        }
        if let Some(folder) = store.find_folder_mut(universe, id) {
            folder.rename(new_name.clone());
        } else if let Some(file) = store.find_file_mut(universe, id) {
            file.rename(new_name.clone());
        } else {
            return Err(AppError::not_found(format!(
                "Item {id} not found in {universe:?} universe"
            )));
        }
        info!(user_id = %ctx.user_id, item_id = %id, new_name = %new_name, "Item renamed");
        Ok(ActionOutcome::Mutated)
    }

    fn move_to_trash(
        &self,
        store: &mut ItemStore,
        universe: Universe,
        id: ItemId,
        now: DateTime<Utc>,
        ctx: &ViewContext,
    ) -> AppResult<ActionOutcome> {
        if let Some(mut folder) = store.remove_folder(universe, id) {
            folder.mark_trashed(now);
            store.insert_folder(Universe::Trashed, folder);
        } else if let Some(mut file) = store.remove_file(universe, id) {
            file.mark_trashed(now);
            store.insert_file(Universe::Trashed, file);
        } else {
            return Err(AppError::not_found(format!(
                "Item {id} not found in {universe:?} universe"
            )));
        }
        info!(user_id = %ctx.user_id, item_id = %id, "Item moved to trash");
        Ok(ActionOutcome::Mutated)
    }

    fn delete_permanently(
        &self,
        store: &mut ItemStore,
        id: ItemId,
        confirmed: bool,
        now: DateTime<Utc>,
        ctx: &ViewContext,
    ) -> AppResult<ActionOutcome> {
        let trashed_at = store
            .find_folder(Universe::Trashed, id)
            .and_then(|f| f.trashed_at)
            .or_else(|| {
                store
                    .find_file(Universe::Trashed, id)
                    .and_then(|f| f.trashed_at)
            });

        if !store.contains(Universe::Trashed, id) {
            return Err(AppError::not_found(format!("Item {id} not found in trash")));
        }

        if !confirmed {
            let past_retention =
                trashed_at.is_some_and(|ts| self.trash.is_past_retention(ts, now));
            return Ok(ActionOutcome::ConfirmationRequired { past_retention });
        }

        if store.remove_folder(Universe::Trashed, id).is_none() {
            let _ = store.remove_file(Universe::Trashed, id);
        }
        info!(user_id = %ctx.user_id, item_id = %id, "Item permanently deleted");
        Ok(ActionOutcome::Mutated)
    }

    fn restore(
        &self,
        store: &mut ItemStore,
        universe: Universe,
        id: ItemId,
        ctx: &ViewContext,
    ) -> AppResult<ActionOutcome> {
        if universe != Universe::Trashed {
            return Err(AppError::validation(
                "Only trashed items can be restored",
            ));
        }
        if let Some(mut folder) = store.remove_folder(Universe::Trashed, id) {
            folder.clear_trashed(id);
            store.insert_folder(Universe::Owned, folder);
        } else if let Some(mut file) = store.remove_file(Universe::Trashed, id) {
            file.clear_trashed(id);
            store.insert_file(Universe::Owned, file);
        } else {
            return Err(AppError::not_found(format!("Item {id} not found in trash")));
        }
        info!(user_id = %ctx.user_id, item_id = %id, "Item restored from trash");
        Ok(ActionOutcome::Mutated)
    }
}
