//! Integration test suites for the DriveDeck core pipeline.

mod helpers;

mod action_test;
mod breadcrumb_test;
mod query_test;
mod selection_test;
mod trash_test;
