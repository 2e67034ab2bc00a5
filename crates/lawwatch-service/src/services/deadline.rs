//! Deadline handling for service operations

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;
use tracing::warn;

use lawwatch_core::error::DomainError;

use super::error::ServiceResult;

/// Run a service future under an optional deadline
///
/// On expiry the future is dropped and `DeadlineExceeded` is returned.
pub async fn with_deadline<F, T>(deadline: Option<Duration>, fut: F) -> ServiceResult<T>
where
    F: Future<Output = ServiceResult<T>>,
{
    match deadline {
        None => fut.await,
        Some(limit) => match timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(deadline_ms = limit.as_millis() as u64, "Deadline exceeded");
                Err(DomainError::DeadlineExceeded.into())
            }
        },
    }
}
