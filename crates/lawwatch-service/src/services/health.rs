//! Health service
//!
//! Probes the change store for readiness checks.

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Liveness: the process is up
    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// Readiness: the store answers a trivial query
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let store_healthy = match self.ctx.change_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store readiness probe failed");
                false
            }
        };

        ReadinessResponse::ready(store_healthy)
    }
}
