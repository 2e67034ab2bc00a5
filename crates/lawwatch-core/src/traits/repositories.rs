//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Both stores are read-only here: events and
//! article text are written by the ingestion process.

use async_trait::async_trait;

use crate::entities::{ArticleSnapshot, LawChangeEvent};
use crate::error::DomainError;
use crate::query::{ChangePage, ChangeQuery};
use crate::value_objects::{ArticleSide, ChangeId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Change Event Repository
// ============================================================================

#[async_trait]
pub trait ChangeEventRepository: Send + Sync {
    /// One page of events matching the query plus the total match count.
    ///
    /// Implementations must filter and order exactly as
    /// [`ChangeQuery::matches`] and [`ChangeQuery::compare`] do, and derive
    /// the page and the count from the same predicate.
    async fn search(&self, query: &ChangeQuery) -> RepoResult<ChangePage>;

    /// Find event by ID
    async fn find_by_id(&self, id: ChangeId) -> RepoResult<Option<LawChangeEvent>>;

    /// Cheap reachability probe used by readiness checks
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Article Repository
// ============================================================================

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Archived article text for one side of a revision.
    ///
    /// `None` means the side was never archived.
    async fn find_snapshot(
        &self,
        mst: &str,
        side: ArticleSide,
    ) -> RepoResult<Option<ArticleSnapshot>>;
}
