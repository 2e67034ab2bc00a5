//! PostgreSQL implementation of ArticleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lawwatch_core::entities::ArticleSnapshot;
use lawwatch_core::traits::{ArticleRepository, RepoResult};
use lawwatch_core::value_objects::ArticleSide;

use crate::mappers::snapshot_from_rows;
use crate::models::{ArticleModel, SnapshotModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self), fields(side = %side))]
    async fn find_snapshot(
        &self,
        mst: &str,
        side: ArticleSide,
    ) -> RepoResult<Option<ArticleSnapshot>> {
        let header = sqlx::query_as::<_, SnapshotModel>(
            r"
            SELECT mst, side, basic
            FROM law_text_snapshot
            WHERE mst = $1 AND side = $2
            ",
        )
        .bind(mst)
        .bind(side.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(header) = header else {
            return Ok(None);
        };

        let articles = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT ordinal, article_no, content
            FROM law_article
            WHERE mst = $1 AND side = $2
            ORDER BY ordinal
            ",
        )
        .bind(mst)
        .bind(side.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Some(snapshot_from_rows(side, header, articles)))
    }
}
