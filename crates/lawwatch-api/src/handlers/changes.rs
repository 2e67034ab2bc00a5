//! Change handlers
//!
//! Endpoints for listing law change events and reading their article diffs.

use axum::{extract::State, Json};
use lawwatch_service::{
    with_deadline, ChangeService, LawChangeDetailResponse, LawChangeListResponse,
    ListChangesParams,
};

use crate::extractors::{ChangeIdPath, RequestDeadline, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// List change events
///
/// GET /changes?start_date&end_date&keyword&change_type&date_basis&page&page_size
pub async fn list_changes(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    ValidatedQuery(params): ValidatedQuery<ListChangesParams>,
) -> ApiResult<Json<LawChangeListResponse>> {
    let service = ChangeService::new(state.service_context());
    let response = with_deadline(Some(deadline.duration()), service.list_changes(params)).await?;
    Ok(Json(response))
}

/// Get a change event with its article diffs
///
/// GET /changes/{change_id}
pub async fn get_change(
    State(state): State<AppState>,
    deadline: RequestDeadline,
    path: ChangeIdPath,
) -> ApiResult<Json<LawChangeDetailResponse>> {
    let service = ChangeService::new(state.service_context());
    let response = with_deadline(
        Some(deadline.duration()),
        service.get_change_detail(path.as_str()),
    )
    .await?;
    Ok(Json(response))
}
