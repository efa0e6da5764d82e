//! Selection state for the current listing.

pub mod tracker;

pub use tracker::SelectionTracker;
