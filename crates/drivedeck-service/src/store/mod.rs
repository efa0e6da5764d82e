//! In-memory item store: the six folder/file collections behind the
//! dashboard views, plus the seeded fixture data.

pub mod seed;
pub mod service;

pub use service::ItemStore;
