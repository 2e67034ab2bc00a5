//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod changes;
pub mod health;
