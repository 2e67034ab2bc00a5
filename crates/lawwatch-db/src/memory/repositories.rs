//! In-memory ChangeEventRepository and ArticleRepository

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use lawwatch_core::entities::{ArticleSnapshot, LawChangeEvent};
use lawwatch_core::error::DomainError;
use lawwatch_core::query::{ChangePage, ChangeQuery};
use lawwatch_core::traits::{ArticleRepository, ChangeEventRepository, RepoResult};
use lawwatch_core::value_objects::{ArticleSide, ChangeId};

/// Shared switches for simulating an unhealthy store
#[derive(Debug, Default)]
pub struct StoreControl {
    unavailable: AtomicBool,
    latency_ms: AtomicU64,
}

impl StoreControl {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every call fail with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Delay every call by the given duration
    pub fn set_latency(&self, latency: Duration) {
        let millis = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self.latency_ms.store(millis, Ordering::SeqCst);
    }

    async fn enter(&self) -> RepoResult<()> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

/// In-memory implementation of ChangeEventRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryChangeEventRepository {
    events: Arc<Vec<LawChangeEvent>>,
    control: Arc<StoreControl>,
}

impl InMemoryChangeEventRepository {
    pub fn new(events: Vec<LawChangeEvent>) -> Self {
        Self::with_control(events, StoreControl::new())
    }

    pub fn with_control(events: Vec<LawChangeEvent>, control: Arc<StoreControl>) -> Self {
        Self {
            events: Arc::new(events),
            control,
        }
    }

    pub fn control(&self) -> &Arc<StoreControl> {
        &self.control
    }
}

#[async_trait]
impl ChangeEventRepository for InMemoryChangeEventRepository {
    #[instrument(skip(self))]
    async fn search(&self, query: &ChangeQuery) -> RepoResult<ChangePage> {
        self.control.enter().await?;

        let mut matching: Vec<&LawChangeEvent> =
            self.events.iter().filter(|e| query.matches(e)).collect();
        matching.sort_by(|a, b| query.compare(a, b));

        let total = matching.len() as u64;
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit()).unwrap_or(0);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(ChangePage::new(items, total))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ChangeId) -> RepoResult<Option<LawChangeEvent>> {
        self.control.enter().await?;
        Ok(self.events.iter().find(|e| e.change_id == id).cloned())
    }

    async fn ping(&self) -> RepoResult<()> {
        self.control.enter().await
    }
}

/// In-memory implementation of ArticleRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleRepository {
    snapshots: Arc<HashMap<(String, ArticleSide), ArticleSnapshot>>,
    control: Arc<StoreControl>,
}

impl InMemoryArticleRepository {
    /// Build from `(mst, snapshot)` pairs; the side comes from each snapshot
    pub fn new(snapshots: impl IntoIterator<Item = (String, ArticleSnapshot)>) -> Self {
        Self::with_control(snapshots, StoreControl::new())
    }

    pub fn with_control(
        snapshots: impl IntoIterator<Item = (String, ArticleSnapshot)>,
        control: Arc<StoreControl>,
    ) -> Self {
        let snapshots = snapshots
            .into_iter()
            .map(|(mst, snapshot)| ((mst, snapshot.side), snapshot))
            .collect();
        Self {
            snapshots: Arc::new(snapshots),
            control,
        }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    #[instrument(skip(self), fields(side = %side))]
    async fn find_snapshot(
        &self,
        mst: &str,
        side: ArticleSide,
    ) -> RepoResult<Option<ArticleSnapshot>> {
        self.control.enter().await?;
        Ok(self.snapshots.get(&(mst.to_string(), side)).cloned())
    }
}
