//! # drivedeck-core
//!
//! Core crate for DriveDeck. Contains typed identifiers, filter and sort
//! value objects, configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DriveDeck crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
