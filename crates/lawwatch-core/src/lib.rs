//! # lawwatch-core
//!
//! Domain layer for law change tracking: change events, article snapshots,
//! the canonical list query, the article diff algorithm, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod diff;
pub mod entities;
pub mod error;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use diff::diff_articles;
pub use entities::{
    Article, ArticleDiffItem, ArticleSnapshot, LawChangeDetail, LawChangeEvent,
};
pub use error::DomainError;
pub use query::{ChangePage, ChangeQuery, DateRange, PaginationLimits};
pub use traits::{ArticleRepository, ChangeEventRepository, RepoResult};
pub use value_objects::{
    ArticleNo, ArticleSide, ChangeId, ChangeIdParseError, ChangeType, DateBasis,
};
