//! Article snapshot entity <-> model mapper

use lawwatch_core::entities::{Article, ArticleSnapshot};
use lawwatch_core::value_objects::{ArticleNo, ArticleSide};

use crate::models::{ArticleModel, SnapshotModel};

/// Convert ArticleModel to Article entity
impl From<ArticleModel> for Article {
    fn from(model: ArticleModel) -> Self {
        Article {
            ordinal: model.ordinal,
            article_no: model.article_no.and_then(ArticleNo::new),
            content: model.content,
        }
    }
}

/// Assemble one side's snapshot from its header row and article rows
pub fn snapshot_from_rows(
    side: ArticleSide,
    header: SnapshotModel,
    articles: Vec<ArticleModel>,
) -> ArticleSnapshot {
    ArticleSnapshot::new(
        side,
        header.basic,
        articles.into_iter().map(Article::from).collect(),
    )
}
