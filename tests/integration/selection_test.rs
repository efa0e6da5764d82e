//! Integration tests for selection over filtered listings.

use drivedeck_core::types::{FilterSpec, ItemId};
use drivedeck_entity::{StorageItem, Universe};
use drivedeck_service::SelectionTracker;

use crate::helpers::TestDeck;

#[test]
fn test_select_all_over_visible_listing_toggles() {
    let deck = TestDeck::new();
    let (folders, files) = deck.engine.apply(
        deck.store.folders(Universe::Owned),
        deck.store.files(Universe::Owned),
        &FilterSpec::default(),
        None,
        deck.now,
        &deck.ctx,
    );
    let mut visible: Vec<ItemId> = folders.iter().map(|f| f.id()).collect();
    visible.extend(files.iter().map(|f| f.id()));

    let mut tracker = SelectionTracker::new();
    tracker.select_all(&visible);
    assert_eq!(tracker.len(), visible.len());
    tracker.select_all(&visible);
    assert!(tracker.is_empty());
}

#[test]
fn test_narrowed_listing_changes_select_all_target() {
    let deck = TestDeck::new();
    let (_, files) = deck.engine.apply(
        deck.store.folders(Universe::Owned),
        deck.store.files(Universe::Owned),
        &FilterSpec::search_only("budget"),
        None,
        deck.now,
        &deck.ctx,
    );
    let narrowed: Vec<ItemId> = files.iter().map(|f| f.id()).collect();
    assert_eq!(narrowed, vec![ItemId(13)]);

    let mut tracker = SelectionTracker::new();
    tracker.toggle(ItemId(11));
    // Select-all against the narrowed listing replaces, never merges.
    tracker.select_all(&narrowed);
    assert_eq!(tracker.selected_ids(), narrowed);
}
