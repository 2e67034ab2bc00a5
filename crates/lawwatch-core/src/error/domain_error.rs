//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::ChangeId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Client Input Errors
    // =========================================================================
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Unrecognised value for {field}: {value:?}")]
    InvalidEnum { field: &'static str, value: String },

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Change not found: {0}")]
    ChangeNotFound(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Deadline exceeded")]
    DeadlineExceeded,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Not-found error for a parsed change id
    pub fn change_not_found(id: ChangeId) -> Self {
        Self::ChangeNotFound(id.to_string())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Client input
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::InvalidDate { .. } => "INVALID_DATE",
            Self::InvalidEnum { .. } => "INVALID_ENUM",
            Self::InvalidPagination(_) => "INVALID_PAGINATION",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Not Found
            Self::ChangeNotFound(_) => "CHANGE_NOT_FOUND",

            // Infrastructure
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ChangeNotFound(_))
    }

    /// Check if this is a client input error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateRange { .. }
                | Self::InvalidDate { .. }
                | Self::InvalidEnum { .. }
                | Self::InvalidPagination(_)
                | Self::ValidationError(_)
        )
    }
}
