//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Optional fields
//! are always present and serialised as `null` when absent, never omitted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Change Responses
// ============================================================================

/// One law change event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawChangeResponse {
    pub change_id: String,
    pub law_id: String,
    pub law_name: String,
    pub law_type_name: Option<String>,
    pub ministry_names: Option<String>,
    pub change_type: Option<String>,
    pub proclamation_no: Option<String>,
    pub proclamation_date: Option<NaiveDate>,
    pub enforce_date: Option<NaiveDate>,
    pub current_hist_cd: Option<String>,
    pub collected_date: NaiveDate,
    pub change_summary: Option<String>,
    pub action_recommendation: Option<String>,
    pub ai_importance: Option<String>,
}

/// Page of the change list plus the size of the full match set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawChangeListResponse {
    pub items: Vec<LawChangeResponse>,
    pub total: u64,
}

/// One article-level before/after comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDiffResponse {
    pub diff_id: String,
    pub old_no: Option<String>,
    pub old_content: Option<String>,
    pub new_no: Option<String>,
    pub new_content: Option<String>,
}

/// Change event with its article diffs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawChangeDetailResponse {
    pub change: LawChangeResponse,
    /// `"Y"` when both texts were available to diff, otherwise `"N"`
    pub has_old_new: String,
    pub old_basic: Option<Value>,
    pub new_basic: Option<Value>,
    pub articles: Vec<ArticleDiffResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
