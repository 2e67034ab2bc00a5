//! # lawwatch-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations of the read-side repository
//! traits defined in `lawwatch-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, plus in-memory equivalents
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lawwatch_db::{create_pool, DatabaseConfig, PgChangeEventRepository};
//! use lawwatch_core::{ChangeEventRepository, ChangeQuery};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default())?;
//!     let repo = PgChangeEventRepository::new(pool);
//!     let page = repo.search(&ChangeQuery::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use memory::{InMemoryArticleRepository, InMemoryChangeEventRepository, StoreControl};
pub use repositories::{PgArticleRepository, PgChangeEventRepository};
