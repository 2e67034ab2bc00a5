//! Article entities - stored article text and article-level diff items

use serde_json::Value;
use uuid::Uuid;

use crate::value_objects::{ArticleNo, ArticleSide};

/// One article of a law text snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Creation order within its snapshot
    pub ordinal: i32,
    pub article_no: Option<ArticleNo>,
    pub content: Option<String>,
}

impl Article {
    pub fn new(ordinal: i32, article_no: Option<&str>, content: Option<&str>) -> Self {
        Self {
            ordinal,
            article_no: article_no.and_then(ArticleNo::new),
            content: content.map(str::to_string),
        }
    }
}

/// Article set of one side of a change, plus its basic-record metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSnapshot {
    pub side: ArticleSide,
    /// Opaque basic record of the law on this side
    pub basic: Option<Value>,
    pub articles: Vec<Article>,
}

impl ArticleSnapshot {
    pub fn new(side: ArticleSide, basic: Option<Value>, articles: Vec<Article>) -> Self {
        Self {
            side,
            basic,
            articles,
        }
    }
}

/// Classification of a diff item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Added,
    Removed,
    Modified,
}

/// One article-level before/after comparison within a change
///
/// At least one of `old_content`/`new_content` is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDiffItem {
    pub diff_id: Uuid,
    pub old_no: Option<ArticleNo>,
    pub old_content: Option<String>,
    pub new_no: Option<ArticleNo>,
    pub new_content: Option<String>,
}

impl ArticleDiffItem {
    pub fn kind(&self) -> DiffKind {
        match (&self.old_no, &self.old_content, &self.new_no, &self.new_content) {
            (None, None, _, _) => DiffKind::Added,
            (_, _, None, None) => DiffKind::Removed,
            _ => DiffKind::Modified,
        }
    }
}
