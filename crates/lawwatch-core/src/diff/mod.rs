//! Article-level diffing of two law text snapshots

mod article_diff;

pub use article_diff::{contents_equal, diff_articles};
