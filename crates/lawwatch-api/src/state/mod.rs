//! Router state
//!
//! Cloned into every handler; both halves sit behind `Arc`.

use std::sync::Arc;
use std::time::Duration;

use lawwatch_common::AppConfig;
use lawwatch_service::ServiceContext;

/// Repositories and settings the change endpoints read from
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    /// Context the change and health services are built over
    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Upper bound on the time a single request may spend in the store
    pub fn request_timeout(&self) -> Duration {
        self.config.query.request_timeout()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("services", &self.services)
            .field("env", &self.config.app.env)
            .field("request_timeout", &self.request_timeout())
            .finish_non_exhaustive()
    }
}
