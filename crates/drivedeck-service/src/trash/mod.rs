//! Trash retention accounting and trash-wide operations.

pub mod retention;

pub use retention::TrashService;
