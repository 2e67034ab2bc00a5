//! Request deadline extractor
//!
//! Clients may ask for a shorter deadline than the server's request timeout
//! with the `x-request-timeout-ms` header.

use std::time::Duration;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderValue},
};

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the client's deadline in milliseconds
pub const REQUEST_TIMEOUT_HEADER: &str = "x-request-timeout-ms";

/// Time budget for handling one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDeadline(pub Duration);

impl RequestDeadline {
    /// Resolve the deadline from the header value, capped at `limit`
    pub fn resolve(header: Option<&HeaderValue>, limit: Duration) -> Result<Self, ApiError> {
        let Some(value) = header else {
            return Ok(Self(limit));
        };

        let millis = value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .ok_or_else(|| {
                ApiError::invalid_header(format!(
                    "{REQUEST_TIMEOUT_HEADER} must be a positive integer"
                ))
            })?;

        Ok(Self(Duration::from_millis(millis).min(limit)))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for RequestDeadline {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::resolve(
            parts.headers.get(REQUEST_TIMEOUT_HEADER),
            state.request_timeout(),
        )
    }
}
