//! Canonical list query and its result page

mod change_query;

pub use change_query::{ChangePage, ChangeQuery, DateRange, PaginationLimits};
