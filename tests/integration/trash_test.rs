//! Integration tests for trash retention accounting.

use chrono::Duration;

use drivedeck_core::types::ItemId;
use drivedeck_entity::Universe;
use drivedeck_service::{ActionOutcome, ActionType};

use crate::helpers::TestDeck;

#[test]
fn test_retention_countdown_for_seeded_trash() {
    let deck = TestDeck::new();
    // old-banner.jpg was trashed 5 days ago.
    let trashed_at = deck
        .store
        .find_file(Universe::Trashed, ItemId(52))
        .and_then(|f| f.trashed_at)
        .expect("trashed_at");
    assert_eq!(
        deck.trash.days_until_permanent_deletion(trashed_at, deck.now),
        25
    );
}

#[test]
fn test_retention_is_zero_after_window_elapses() {
    let deck = TestDeck::new();
    let trashed_at = deck.now - Duration::days(30);
    assert_eq!(
        deck.trash.days_until_permanent_deletion(trashed_at, deck.now),
        0
    );
    assert_eq!(
        deck.trash
            .days_until_permanent_deletion(deck.now - Duration::days(365), deck.now),
        0
    );
}

#[test]
fn test_expired_item_prompts_with_extra_warning() {
    let mut deck = TestDeck::new();
    // draft.txt has been in the trash past the retention window.
    let outcome = deck
        .dispatcher
        .dispatch(
            &mut deck.store,
            Universe::Trashed,
            ItemId(51),
            ActionType::Delete,
            false,
            deck.now,
            &deck.ctx,
        )
        .expect("dispatch");
    assert_eq!(
        outcome,
        ActionOutcome::ConfirmationRequired {
            past_retention: true
        }
    );
}

#[test]
fn test_purgeable_ids_tracks_the_window() {
    let deck = TestDeck::new();
    assert_eq!(deck.trash.purgeable_ids(&deck.store, deck.now), vec![ItemId(51)]);

    let later = deck.now + Duration::days(26);
    let mut purgeable = deck.trash.purgeable_ids(&deck.store, later);
    purgeable.sort();
    // 26 days later the 10-day-old folder and 5-day-old banner have also
    // passed the window.
    assert_eq!(purgeable, vec![ItemId(41), ItemId(51), ItemId(52)]);
}

#[test]
fn test_empty_trash_requires_confirmation() {
    let mut deck = TestDeck::new();
    assert_eq!(deck.trash.empty_trash(&mut deck.store, false), 0);
    assert_eq!(deck.store.universe_len(Universe::Trashed), 3);
    assert_eq!(deck.trash.empty_trash(&mut deck.store, true), 3);
    assert_eq!(deck.store.universe_len(Universe::Trashed), 0);
}
