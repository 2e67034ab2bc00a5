//! Database models - SQLx-compatible structs for PostgreSQL tables

mod article;
mod law_change;

pub use article::{ArticleModel, SnapshotModel};
pub use law_change::LawChangeModel;
