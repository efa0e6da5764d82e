//! Integration tests for breadcrumb resolution.

use drivedeck_core::types::ItemId;
use drivedeck_entity::Universe;

use crate::helpers::TestDeck;

#[test]
fn test_owned_path_root_to_leaf() {
    let deck = TestDeck::new();
    let crumbs = deck
        .resolver
        .resolve(&deck.store, ItemId(3), Universe::Owned, &deck.ctx)
        .expect("resolve");
    let names: Vec<&str> = crumbs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["All Folders", "Projects", "Design", "Mockups"]);
    let ids: Vec<ItemId> = crumbs.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![ItemId::ROOT, ItemId(1), ItemId(2), ItemId(3)]);
}

#[test]
fn test_parentless_folder_yields_exactly_two_crumbs() {
    let deck = TestDeck::new();
    let crumbs = deck
        .resolver
        .resolve(&deck.store, ItemId(4), Universe::Owned, &deck.ctx)
        .expect("resolve");
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs[0].name, "All Folders");
    assert_eq!(crumbs[1].name, "Finance");
}

#[test]
fn test_missing_folder_signals_redirect_to_root() {
    let deck = TestDeck::new();
    let err = deck
        .resolver
        .resolve(&deck.store, ItemId(777), Universe::Trashed, &deck.ctx)
        .expect_err("should not resolve");
    assert!(err.is_not_found());
}

#[test]
fn test_trashed_item_resolves_only_in_trash_universe() {
    let mut deck = TestDeck::new();
    deck.dispatcher
        .dispatch(
            &mut deck.store,
            Universe::Owned,
            ItemId(3),
            drivedeck_service::ActionType::Delete,
            false,
            deck.now,
            &deck.ctx,
        )
        .expect("soft delete");

    assert!(deck
        .resolver
        .resolve(&deck.store, ItemId(3), Universe::Owned, &deck.ctx)
        .is_err());

    let crumbs = deck
        .resolver
        .resolve(&deck.store, ItemId(3), Universe::Trashed, &deck.ctx)
        .expect("resolve in trash");
    assert_eq!(crumbs[0].name, "Trash");
    assert_eq!(crumbs.last().map(|c| c.name.as_str()), Some("Mockups"));
}
