//! Integration test utilities for the law change API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API over in-memory stores.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
