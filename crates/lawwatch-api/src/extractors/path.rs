//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Change id as it appeared in the path
///
/// Kept raw: an id that does not parse is reported as not found by the
/// service, not as a malformed request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeIdPath {
    pub change_id: String,
}

impl ChangeIdPath {
    pub fn as_str(&self) -> &str {
        &self.change_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ChangeIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(path) = Path::<ChangeIdPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(path)
    }
}
