//! PostgreSQL implementation of ChangeEventRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};

use lawwatch_core::entities::LawChangeEvent;
use lawwatch_core::query::{ChangePage, ChangeQuery};
use lawwatch_core::traits::{ChangeEventRepository, RepoResult};
use lawwatch_core::value_objects::ChangeId;

use crate::models::LawChangeModel;

use super::error::map_db_error;

const SELECT_EVENTS: &str = r"
    SELECT e.change_id, e.law_id, e.mst, l.law_name, l.law_type_name, l.ministry_names,
           e.change_type, e.proclamation_no, e.proclamation_date, e.enforce_date,
           e.current_hist_cd, e.collected_date, e.change_summary,
           e.action_recommendation, e.ai_importance
    FROM law_change_event e
    JOIN law l ON l.law_id = e.law_id";

const COUNT_EVENTS: &str = r"
    SELECT COUNT(*)
    FROM law_change_event e
    JOIN law l ON l.law_id = e.law_id";

/// PostgreSQL implementation of ChangeEventRepository
#[derive(Clone)]
pub struct PgChangeEventRepository {
    pool: PgPool,
}

impl PgChangeEventRepository {
    /// Create a new PgChangeEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the WHERE clause shared by the page and count queries
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ChangeQuery) {
    let column = query.date_basis.column();
    builder.push(" WHERE TRUE");

    // NULL dates fail either comparison, so a bounded range drops them
    if let Some(start) = query.range.start() {
        builder.push(format!(" AND e.{column} >= ")).push_bind(start);
    }
    if let Some(end) = query.range.end() {
        builder.push(format!(" AND e.{column} <= ")).push_bind(end);
    }

    if let Some(kind) = query.change_type {
        builder
            .push(" AND (btrim(e.change_type) = ")
            .push_bind(kind.label())
            .push(" OR lower(btrim(e.change_type)) = ")
            .push_bind(kind.code())
            .push(")");
    }

    if let Some(keyword) = &query.keyword {
        builder
            .push(" AND (strpos(lower(l.law_name), lower(")
            .push_bind(keyword.clone())
            .push(")) > 0 OR strpos(lower(coalesce(e.change_summary, '')), lower(")
            .push_bind(keyword.clone())
            .push(")) > 0)");
    }
}

fn page_query(query: &ChangeQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_EVENTS);
    push_filters(&mut builder, query);
    builder
        .push(format!(
            " ORDER BY e.{} DESC NULLS LAST, e.change_id ASC",
            query.date_basis.column()
        ))
        .push(" LIMIT ")
        .push_bind(query.limit())
        .push(" OFFSET ")
        .push_bind(query.offset());
    builder
}

fn count_query(query: &ChangeQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(COUNT_EVENTS);
    push_filters(&mut builder, query);
    builder
}

#[async_trait]
impl ChangeEventRepository for PgChangeEventRepository {
    #[instrument(skip(self), fields(basis = %query.date_basis, page = query.page))]
    async fn search(&self, query: &ChangeQuery) -> RepoResult<ChangePage> {
        // Page and count must observe the same rows
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let rows = page_query(query)
            .build_query_as::<LawChangeModel>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let total = if query.offset() == 0 && (rows.len() as i64) < query.limit() {
            rows.len() as u64
        } else {
            let count = count_query(query)
                .build_query_scalar::<i64>()
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
            count.max(0) as u64
        };

        tx.commit().await.map_err(map_db_error)?;

        debug!(total, returned = rows.len(), "Change events fetched");

        Ok(ChangePage::new(
            rows.into_iter().map(LawChangeEvent::from).collect(),
            total,
        ))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ChangeId) -> RepoResult<Option<LawChangeEvent>> {
        let result = sqlx::query_as::<_, LawChangeModel>(&format!(
            "{SELECT_EVENTS} WHERE e.change_id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(LawChangeEvent::from))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
