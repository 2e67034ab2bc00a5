//! Service context - dependency container for services
//!
//! Holds the repositories and query limits needed by services.

use std::sync::Arc;

use lawwatch_core::query::PaginationLimits;
use lawwatch_core::traits::{ArticleRepository, ChangeEventRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    change_repo: Arc<dyn ChangeEventRepository>,
    article_repo: Arc<dyn ArticleRepository>,

    // Query limits
    pagination: PaginationLimits,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        change_repo: Arc<dyn ChangeEventRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        pagination: PaginationLimits,
    ) -> Self {
        Self {
            change_repo,
            article_repo,
            pagination,
        }
    }

    // === Repositories ===

    /// Get the change event repository
    pub fn change_repo(&self) -> &dyn ChangeEventRepository {
        self.change_repo.as_ref()
    }

    /// Get the article text repository
    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    // === Limits ===

    /// Page size bounds for list queries
    pub fn pagination(&self) -> PaginationLimits {
        self.pagination
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("pagination", &self.pagination)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    change_repo: Option<Arc<dyn ChangeEventRepository>>,
    article_repo: Option<Arc<dyn ArticleRepository>>,
    pagination: Option<PaginationLimits>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn change_repo(mut self, repo: Arc<dyn ChangeEventRepository>) -> Self {
        self.change_repo = Some(repo);
        self
    }

    pub fn article_repo(mut self, repo: Arc<dyn ArticleRepository>) -> Self {
        self.article_repo = Some(repo);
        self
    }

    pub fn pagination(mut self, limits: PaginationLimits) -> Self {
        self.pagination = Some(limits);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a repository is missing or the
    /// pagination limits are inconsistent
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pagination = self.pagination.unwrap_or_default();
        if pagination.default_page_size == 0
            || pagination.default_page_size > pagination.max_page_size
        {
            return Err(ServiceError::internal(format!(
                "default page size {} must be between 1 and {}",
                pagination.default_page_size, pagination.max_page_size
            )));
        }

        Ok(ServiceContext::new(
            self.change_repo
                .ok_or_else(|| ServiceError::internal("change_repo is required"))?,
            self.article_repo
                .ok_or_else(|| ServiceError::internal("article_repo is required"))?,
            pagination,
        ))
    }
}
