//! Integration tests for action dispatch across universes.

use drivedeck_core::types::ItemId;
use drivedeck_entity::Universe;
use drivedeck_service::{ActionOutcome, ActionType};

use crate::helpers::TestDeck;

#[test]
fn test_delete_then_delete_again_is_permanent() {
    let mut deck = TestDeck::new();
    let id = ItemId(11);

    let outcome = deck
        .dispatcher
        .dispatch(
            &mut deck.store,
            Universe::Owned,
            id,
            ActionType::Delete,
            false,
            deck.now,
            &deck.ctx,
        )
        .expect("soft delete");
    assert_eq!(outcome, ActionOutcome::Mutated);
    assert!(!deck.store.contains(Universe::Owned, id));
    assert!(deck.store.contains(Universe::Trashed, id));

    let outcome = deck
        .dispatcher
        .dispatch(
            &mut deck.store,
            Universe::Trashed,
            id,
            ActionType::Delete,
            true,
            deck.now,
            &deck.ctx,
        )
        .expect("permanent delete");
    assert_eq!(outcome, ActionOutcome::Mutated);
    assert!(!deck.store.contains(Universe::Trashed, id));
    assert!(!deck.store.contains(Universe::Owned, id));
}

#[test]
fn test_trash_and_restore_round_trip() {
    let mut deck = TestDeck::new();
    let id = ItemId(13);

    deck.dispatcher
        .dispatch(
            &mut deck.store,
            Universe::Owned,
            id,
            ActionType::Delete,
            false,
            deck.now,
            &deck.ctx,
        )
        .expect("soft delete");
    deck.dispatcher
        .dispatch(
            &mut deck.store,
            Universe::Trashed,
            id,
            ActionType::Restore,
            false,
            deck.now,
            &deck.ctx,
        )
        .expect("restore");

    let restored = deck
        .store
        .find_file(Universe::Owned, id)
        .expect("restored file");
    assert!(!restored.trashed);
    assert_eq!(restored.trashed_at, None);
    assert_eq!(restored.original_id, Some(id));
    // Reinstated at the root, not its pre-trash folder.
    assert_eq!(restored.folder_id, None);
}

#[test]
fn test_bulk_delete_moves_all_resolved_ids() {
    let mut deck = TestDeck::new();
    let outcome = deck.dispatcher.dispatch_bulk(
        &mut deck.store,
        Universe::Owned,
        &[ItemId(14), ItemId(15), ItemId(888)],
        &ActionType::Delete,
        false,
        deck.now,
        &deck.ctx,
    );
    assert_eq!(outcome.mutated, 2);
    assert_eq!(outcome.not_found, 1);
    assert!(deck.store.contains(Universe::Trashed, ItemId(14)));
    assert!(deck.store.contains(Universe::Trashed, ItemId(15)));
}

#[test]
fn test_placeholder_actions_leave_store_untouched() {
    let mut deck = TestDeck::new();
    let before_owned = deck.store.universe_len(Universe::Owned);
    let before_trash = deck.store.universe_len(Universe::Trashed);

    for action in [ActionType::Share, ActionType::Move, ActionType::Info] {
        let outcome = deck
            .dispatcher
            .dispatch(
                &mut deck.store,
                Universe::Owned,
                ItemId(1),
                action,
                false,
                deck.now,
                &deck.ctx,
            )
            .expect("dispatch");
        assert_eq!(outcome, ActionOutcome::Acknowledged);
    }

    assert_eq!(deck.store.universe_len(Universe::Owned), before_owned);
    assert_eq!(deck.store.universe_len(Universe::Trashed), before_trash);
}

#[test]
fn test_rename_validation() {
    let mut deck = TestDeck::new();
    let outcome = deck
        .dispatcher
        .dispatch(
            &mut deck.store,
            Universe::Owned,
            ItemId(4),
            ActionType::Rename {
                new_name: String::new(),
            },
            false,
            deck.now,
            &deck.ctx,
        )
        .expect("dispatch");
    assert_eq!(outcome, ActionOutcome::Declined);

    deck.dispatcher
        .dispatch(
            &mut deck.store,
            Universe::Owned,
            ItemId(4),
            ActionType::Rename {
                new_name: "Accounting".to_string(),
            },
            false,
            deck.now,
            &deck.ctx,
        )
        .expect("dispatch");
    assert_eq!(
        deck.store
            .find_folder(Universe::Owned, ItemId(4))
            .map(|f| f.name.as_str()),
        Some("Accounting")
    );
}
