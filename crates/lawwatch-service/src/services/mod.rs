//! Business logic services
//!
//! Query normalisation, change retrieval, detail aggregation, and the
//! dependency container they share.

pub mod change;
pub mod context;
pub mod deadline;
pub mod error;
pub mod health;
pub mod query;

// Re-export all services for convenience
pub use change::ChangeService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use deadline::with_deadline;
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use query::ChangeQueryNormalizer;
