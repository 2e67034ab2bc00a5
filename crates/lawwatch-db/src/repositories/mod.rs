//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in lawwatch-core.

mod article;
mod error;
mod law_change;

pub use article::PgArticleRepository;
pub use law_change::PgChangeEventRepository;
