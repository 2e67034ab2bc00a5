//! Change service
//!
//! Serves the change list and the change detail with its article diffs.

use lawwatch_core::entities::LawChangeDetail;
use lawwatch_core::error::DomainError;
use lawwatch_core::value_objects::{ArticleSide, ChangeId};
use tracing::{debug, info, instrument};

use crate::dto::{LawChangeDetailResponse, LawChangeListResponse, ListChangesParams};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::query::ChangeQueryNormalizer;

/// Change service
pub struct ChangeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChangeService<'a> {
    /// Create a new ChangeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List change events matching the filters, one page at a time
    ///
    /// `total` counts every match, not just the returned page.
    #[instrument(skip(self, params))]
    pub async fn list_changes(
        &self,
        params: ListChangesParams,
    ) -> ServiceResult<LawChangeListResponse> {
        let query = ChangeQueryNormalizer::new(self.ctx.pagination()).normalize(params)?;

        let page = self.ctx.change_repo().search(&query).await?;

        info!(
            total = page.total,
            returned = page.items.len(),
            page = query.page,
            basis = %query.date_basis,
            "Change list served"
        );

        Ok(LawChangeListResponse::from(page))
    }

    /// Get a change event with its article-level diffs
    ///
    /// An id that does not parse cannot name an event and is reported as not
    /// found.
    #[instrument(skip(self))]
    pub async fn get_change_detail(&self, change_id: &str) -> ServiceResult<LawChangeDetailResponse> {
        let id = ChangeId::parse(change_id)
            .map_err(|_| ServiceError::change_not_found(change_id.trim()))?;

        let change = self
            .ctx
            .change_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::change_not_found(id))?;

        let articles = self.ctx.article_repo();
        let (old, new) = tokio::try_join!(
            articles.find_snapshot(&change.mst, ArticleSide::Old),
            articles.find_snapshot(&change.mst, ArticleSide::New),
        )?;

        let detail = LawChangeDetail::assemble(change, old, new);

        debug!(
            change_id = %id,
            has_old_new = detail.has_old_new,
            articles = detail.articles.len(),
            "Change detail assembled"
        );

        Ok(LawChangeDetailResponse::from(detail))
    }
}
