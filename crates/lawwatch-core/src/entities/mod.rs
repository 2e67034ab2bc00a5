//! Domain entities - core business objects

mod article;
mod detail;
mod law_change;

pub use article::{Article, ArticleDiffItem, ArticleSnapshot, DiffKind};
pub use detail::LawChangeDetail;
pub use law_change::LawChangeEvent;
