//! User actions and their dispatch against the item store.

pub mod dispatcher;

pub use dispatcher::{ActionOutcome, ActionType, BulkOutcome, Dispatcher};
