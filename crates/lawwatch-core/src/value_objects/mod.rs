//! Value objects - immutable types that represent domain concepts

mod article_no;
mod change_id;
mod change_type;
mod date_basis;

pub use article_no::{ArticleNo, ArticleSide};
pub use change_id::{ChangeId, ChangeIdParseError};
pub use change_type::ChangeType;
pub use date_basis::DateBasis;
