//! Integration tests for the filter & sort pipeline.

use drivedeck_core::types::{CategoryFilter, FilterSpec, ItemId, PeopleFilter, SortKey, SortSpec};
use drivedeck_entity::Universe;

use crate::helpers::TestDeck;

#[test]
fn test_all_pass_spec_preserves_input_order() {
    let deck = TestDeck::new();
    let folders = deck.store.folders(Universe::Owned);
    let files = deck.store.files(Universe::Owned);
    let (out_folders, out_files) =
        deck.engine
            .apply(folders, files, &FilterSpec::default(), None, deck.now, &deck.ctx);

    assert_eq!(
        folders.iter().map(|f| f.id).collect::<Vec<_>>(),
        out_folders.iter().map(|f| f.id).collect::<Vec<_>>()
    );
    assert_eq!(
        files.iter().map(|f| f.id).collect::<Vec<_>>(),
        out_files.iter().map(|f| f.id).collect::<Vec<_>>()
    );
}

#[test]
fn test_search_and_category_compose() {
    let deck = TestDeck::new();
    let spec = FilterSpec {
        category: CategoryFilter::Spreadsheets,
        search: "budget".to_string(),
        ..FilterSpec::default()
    };
    let (out_folders, out_files) = deck.engine.apply(
        deck.store.folders(Universe::Owned),
        deck.store.files(Universe::Owned),
        &spec,
        None,
        deck.now,
        &deck.ctx,
    );
    assert!(out_folders.is_empty());
    assert_eq!(out_files.iter().map(|f| f.id).collect::<Vec<_>>(), vec![ItemId(13)]);
}

#[test]
fn test_people_me_filter_uses_owner_id() {
    let deck = TestDeck::new();
    let spec = FilterSpec {
        people: PeopleFilter::Me,
        ..FilterSpec::default()
    };
    // In the shared universe nothing is owned by the current user.
    let shared_folders = deck.store.visible_shared_folders(&deck.ctx);
    let shared_files = deck.store.visible_shared_files(&deck.ctx);
    let (out_folders, out_files) = deck.engine.apply(
        &shared_folders,
        &shared_files,
        &spec,
        None,
        deck.now,
        &deck.ctx,
    );
    assert!(out_folders.is_empty());
    assert!(out_files.is_empty());
}

#[test]
fn test_size_sort_over_full_listing() {
    let deck = TestDeck::new();
    let (_, out_files) = deck.engine.apply(
        deck.store.folders(Universe::Owned),
        deck.store.files(Universe::Owned),
        &FilterSpec::default(),
        Some(&SortSpec::asc(SortKey::Size)),
        deck.now,
        &deck.ctx,
    );
    let sizes: Vec<f64> = out_files
        .iter()
        .map(|f| drivedeck_entity::parse_size_label(&f.size))
        .collect();
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_shared_universe_excludes_own_items() {
    let deck = TestDeck::new();
    let folders = deck.store.visible_shared_folders(&deck.ctx);
    let files = deck.store.visible_shared_files(&deck.ctx);
    assert!(folders.iter().all(|f| f.owner_id != deck.ctx.user_id));
    assert!(files.iter().all(|f| f.owner_id != deck.ctx.user_id));
    assert!(!folders.is_empty());
}
