//! DriveDeck demo — seeds the sample dataset and walks through the core
//! pipeline: query, breadcrumbs, actions, and trash retention.

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{fmt, EnvFilter};

use drivedeck_core::config::AppConfig;
use drivedeck_core::types::{CategoryFilter, FilterSpec, SortKey, SortSpec};
use drivedeck_entity::Universe;
use drivedeck_service::store::seed;
use drivedeck_service::{ActionType, Dispatcher, PathResolver, QueryEngine, TrashService};

fn main() -> anyhow::Result<()> {
    let env = std::env::var("DRIVEDECK_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env).context("failed to load configuration")?;
    init_logging(&config);

    tracing::info!("Starting DriveDeck demo v{}", env!("CARGO_PKG_VERSION"));

    let now = Utc::now();
    let (mut store, ctx) = seed::sample_store(now);
    let engine = QueryEngine::new();
    let resolver = PathResolver::new(config.resolver.clone());
    let trash = TrashService::new(config.trash.clone());
    let dispatcher = Dispatcher::new(trash.clone());

    // Pass-through listing of the owned universe.
    let (folders, files) = engine.apply(
        store.folders(Universe::Owned),
        store.files(Universe::Owned),
        &FilterSpec::default(),
        Some(&SortSpec::asc(SortKey::Name)),
        now,
        &ctx,
    );
    tracing::info!(
        folders = folders.len(),
        files = files.len(),
        "Owned universe listing"
    );
    println!("{}", serde_json::to_string_pretty(&folders)?);

    // Image files only, largest first.
    let (_, images) = engine.apply(
        store.folders(Universe::Owned),
        store.files(Universe::Owned),
        &FilterSpec {
            category: CategoryFilter::Images,
            ..FilterSpec::default()
        },
        Some(&SortSpec::desc(SortKey::Size)),
        now,
        &ctx,
    );
    println!("{}", serde_json::to_string_pretty(&images)?);

    // Breadcrumbs for the deepest seeded folder.
    let crumbs = resolver.resolve(&store, drivedeck_core::types::ItemId(3), Universe::Owned, &ctx)?;
    println!("{}", serde_json::to_string_pretty(&crumbs)?);

    // Trash round trip: soft delete, then confirm permanent deletion.
    let target = drivedeck_core::types::ItemId(12);
    dispatcher.dispatch(
        &mut store,
        Universe::Owned,
        target,
        ActionType::Delete,
        false,
        now,
        &ctx,
    )?;
    let prompt = dispatcher.dispatch(
        &mut store,
        Universe::Trashed,
        target,
        ActionType::Delete,
        false,
        now,
        &ctx,
    )?;
    println!("{}", serde_json::to_string_pretty(&prompt)?);
    dispatcher.dispatch(
        &mut store,
        Universe::Trashed,
        target,
        ActionType::Delete,
        true,
        now,
        &ctx,
    )?;

    // Retention countdown for what remains in the trash.
    for folder in store.folders(Universe::Trashed) {
        if let Some(trashed_at) = folder.trashed_at {
            tracing::info!(
                name = %folder.name,
                days_left = trash.days_until_permanent_deletion(trashed_at, now),
                "Trash retention"
            );
        }
    }

    tracing::info!("Demo complete");
    Ok(())
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
