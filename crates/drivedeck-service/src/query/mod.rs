//! The filter & sort query engine: pure derivation of listing views from
//! item-store snapshots.

pub mod engine;
pub mod sort;

pub use engine::QueryEngine;
pub use sort::compare_items;
