//! Shared test helpers for integration tests.

use chrono::{DateTime, Utc};

use drivedeck_core::config::AppConfig;
use drivedeck_service::store::seed;
use drivedeck_service::{Dispatcher, ItemStore, PathResolver, QueryEngine, TrashService, ViewContext};

/// Test fixture bundling the seeded store and every service under test.
pub struct TestDeck {
    /// The seeded item store.
    pub store: ItemStore,
    /// View context for the fixture user.
    pub ctx: ViewContext,
    /// The instant the fixture was seeded against.
    pub now: DateTime<Utc>,
    /// Query engine under test.
    pub engine: QueryEngine,
    /// Action dispatcher under test.
    pub dispatcher: Dispatcher,
    /// Breadcrumb resolver under test.
    pub resolver: PathResolver,
    /// Trash retention service under test.
    pub trash: TrashService,
}

impl TestDeck {
    /// Create a fixture with default configuration and seeded data.
    pub fn new() -> Self {
        let config = AppConfig::default();
        let now = Utc::now();
        let (store, ctx) = seed::sample_store(now);
        let trash = TrashService::new(config.trash.clone());
        Self {
            store,
            ctx,
            now,
            engine: QueryEngine::new(),
            dispatcher: Dispatcher::new(trash.clone()),
            resolver: PathResolver::new(config.resolver),
            trash,
        }
    }
}
