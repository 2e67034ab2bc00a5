//! Application error types
//!
//! `AppError` covers process-level failures (startup, binding, serving).
//! Request failures carry a `DomainError`, mapped to HTTP by
//! [`domain_status_code`].

use lawwatch_core::DomainError;

/// Failure while assembling or running the server
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Create a configuration error
    pub fn config(msg: impl std::fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// HTTP status code for a domain error
#[must_use]
pub fn domain_status_code(err: &DomainError) -> u16 {
    match err {
        DomainError::StoreUnavailable(_) => 503,
        DomainError::DeadlineExceeded => 504,
        e if e.is_not_found() => 404,
        e if e.is_validation() => 400,
        _ => 500,
    }
}
