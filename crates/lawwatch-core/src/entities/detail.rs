//! Law change detail aggregate

use serde_json::Value;

use super::{ArticleDiffItem, ArticleSnapshot, LawChangeEvent};
use crate::diff::diff_articles;

/// A change event together with its article-level diffs
#[derive(Debug, Clone, PartialEq)]
pub struct LawChangeDetail {
    pub change: LawChangeEvent,
    /// Whether both old and new texts were available to diff
    pub has_old_new: bool,
    pub old_basic: Option<Value>,
    pub new_basic: Option<Value>,
    pub articles: Vec<ArticleDiffItem>,
}

impl LawChangeDetail {
    /// Aggregate a change with whichever snapshots could be loaded.
    ///
    /// Articles are only diffed when both sides are present; otherwise the
    /// list is empty and the basic records reflect the available sides.
    pub fn assemble(
        change: LawChangeEvent,
        old: Option<ArticleSnapshot>,
        new: Option<ArticleSnapshot>,
    ) -> Self {
        match (old, new) {
            (Some(old), Some(new)) => {
                let articles = diff_articles(&change.change_id, &old.articles, &new.articles);
                Self {
                    change,
                    has_old_new: true,
                    old_basic: old.basic,
                    new_basic: new.basic,
                    articles,
                }
            }
            (old, new) => Self {
                change,
                has_old_new: false,
                old_basic: old.and_then(|s| s.basic),
                new_basic: new.and_then(|s| s.basic),
                articles: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Article;
    use crate::value_objects::{ArticleSide, ChangeId};
    use chrono::NaiveDate;
    use serde_json::json;
    use uuid::Uuid;

    fn change() -> LawChangeEvent {
        LawChangeEvent::new(
            ChangeId::new(Uuid::new_v4()),
            "001234",
            "265001",
            "근로기준법",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    fn snapshot(side: ArticleSide, articles: Vec<Article>) -> ArticleSnapshot {
        ArticleSnapshot::new(side, Some(json!({ "side": side.as_str() })), articles)
    }

    #[test]
    fn test_both_sides_present() {
        let old = snapshot(ArticleSide::Old, vec![Article::new(1, Some("제1조"), Some("a"))]);
        let new = snapshot(ArticleSide::New, vec![Article::new(1, Some("제1조"), Some("b"))]);

        let detail = LawChangeDetail::assemble(change(), Some(old), Some(new));
        assert!(detail.has_old_new);
        assert_eq!(detail.articles.len(), 1);
        assert_eq!(detail.old_basic, Some(json!({ "side": "old" })));
        assert_eq!(detail.new_basic, Some(json!({ "side": "new" })));
    }

    #[test]
    fn test_missing_side_yields_no_articles() {
        let new = snapshot(ArticleSide::New, vec![Article::new(1, Some("제1조"), Some("b"))]);

        let detail = LawChangeDetail::assemble(change(), None, Some(new));
        assert!(!detail.has_old_new);
        assert!(detail.articles.is_empty());
        assert!(detail.old_basic.is_none());
        assert_eq!(detail.new_basic, Some(json!({ "side": "new" })));
    }

    #[test]
    fn test_no_sides() {
        let detail = LawChangeDetail::assemble(change(), None, None);
        assert!(!detail.has_old_new);
        assert!(detail.articles.is_empty());
        assert!(detail.old_basic.is_none() && detail.new_basic.is_none());
    }
}
