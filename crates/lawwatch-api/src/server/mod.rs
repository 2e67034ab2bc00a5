//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use lawwatch_common::{AppConfig, AppError};
use lawwatch_core::traits::{ArticleRepository, ChangeEventRepository};
use lawwatch_db::{create_pool, DatabaseConfig, PgArticleRepository, PgChangeEventRepository};
use lawwatch_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
        state.request_timeout(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Creating PostgreSQL pool...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .map_err(|e| AppError::config(format!("Invalid database configuration: {e}")))?;
    info!(
        max_connections = config.database.max_connections,
        "PostgreSQL pool ready"
    );

    let change_repo = Arc::new(PgChangeEventRepository::new(pool.clone()));
    let article_repo = Arc::new(PgArticleRepository::new(pool));

    create_app_state_with_repositories(config, change_repo, article_repo)
}

/// Create AppState over caller-supplied repositories
pub fn create_app_state_with_repositories(
    config: AppConfig,
    change_repo: Arc<dyn ChangeEventRepository>,
    article_repo: Arc<dyn ArticleRepository>,
) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .change_repo(change_repo)
        .article_repo(article_repo)
        .pagination(config.query.pagination_limits())
        .build()
        .map_err(AppError::config)?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid listen address {}: {e}", config.api.address())))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
