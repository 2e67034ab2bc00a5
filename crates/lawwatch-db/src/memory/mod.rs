//! In-memory repository implementations
//!
//! Filter and order through [`ChangeQuery::matches`](lawwatch_core::ChangeQuery::matches)
//! and [`ChangeQuery::compare`](lawwatch_core::ChangeQuery::compare), the same
//! semantics the PostgreSQL adapters express in SQL. Used for local runs
//! without a database and as test doubles.

mod repositories;

pub use repositories::{InMemoryArticleRepository, InMemoryChangeEventRepository, StoreControl};
