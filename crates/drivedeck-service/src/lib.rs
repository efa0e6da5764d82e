//! # drivedeck-service
//!
//! Business logic for DriveDeck. The [`store::ItemStore`] owns the
//! in-memory item collections; the [`query::QueryEngine`] derives
//! filtered and sorted views from snapshots of them; the
//! [`action::Dispatcher`] applies user actions as synchronous mutations;
//! the [`breadcrumb::PathResolver`] and [`trash::TrashService`] cover
//! path display and retention accounting.
//!
//! Everything here is synchronous and single-threaded: the hosting view
//! owns the store, mutations complete atomically with respect to
//! subsequent reads, and the derivation functions never mutate their
//! inputs.

pub mod action;
pub mod breadcrumb;
pub mod context;
pub mod query;
pub mod selection;
pub mod store;
pub mod trash;

pub use action::{ActionOutcome, ActionType, BulkOutcome, Dispatcher};
pub use breadcrumb::PathResolver;
pub use context::ViewContext;
pub use query::QueryEngine;
pub use selection::SelectionTracker;
pub use store::ItemStore;
pub use trash::TrashService;
