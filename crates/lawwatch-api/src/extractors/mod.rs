//! Axum extractors for request handling
//!
//! Custom extractors for query validation, path ids, and request deadlines.

mod deadline;
mod path;
mod validated;

pub use deadline::{RequestDeadline, REQUEST_TIMEOUT_HEADER};
pub use path::ChangeIdPath;
pub use validated::ValidatedQuery;
