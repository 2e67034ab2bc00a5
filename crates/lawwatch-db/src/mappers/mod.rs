//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.
//! The store is read-only from this service, so there are no insert mappers.

mod article;
mod law_change;

pub use article::snapshot_from_rows;
