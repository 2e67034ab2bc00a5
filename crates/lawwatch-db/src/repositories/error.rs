//! Error handling utilities for repositories

use lawwatch_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Every storage failure surfaces as `StoreUnavailable`; callers never see an
/// empty result in place of an error.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StoreUnavailable(e.to_string())
}
