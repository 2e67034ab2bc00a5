//! # lawwatch-service
//!
//! Application layer: turns raw list parameters into canonical queries,
//! retrieves change events, aggregates article diffs, and assembles the
//! response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ArticleDiffResponse, HealthChecks, HealthResponse, LawChangeDetailResponse,
    LawChangeListResponse, LawChangeResponse, ListChangesParams, ReadinessResponse,
};
pub use services::{
    with_deadline, ChangeQueryNormalizer, ChangeService, HealthService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
