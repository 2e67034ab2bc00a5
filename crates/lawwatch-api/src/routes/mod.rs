//! Route definitions
//!
//! API routes are mounted under /api/v1; health routes sit at the root.

use axum::{routing::get, Router};

use crate::handlers::{changes, health};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(change_routes())
}

/// Change routes
fn change_routes() -> Router<AppState> {
    Router::new()
        .route("/changes", get(changes::list_changes))
        .route("/changes/:change_id", get(changes::get_change))
}
