//! Query normaliser
//!
//! Turns the raw, string-valued list parameters into a validated
//! [`ChangeQuery`], or reports the first malformed field.

use chrono::NaiveDate;
use validator::Validate;

use lawwatch_core::error::DomainError;
use lawwatch_core::query::{ChangeQuery, DateRange, PaginationLimits};
use lawwatch_core::value_objects::{ChangeType, DateBasis};

use crate::dto::ListChangesParams;

use super::error::ServiceResult;

/// ISO calendar date, e.g. `2024-01-31`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates list parameters against the configured page bounds
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeQueryNormalizer {
    limits: PaginationLimits,
}

impl ChangeQueryNormalizer {
    pub fn new(limits: PaginationLimits) -> Self {
        Self { limits }
    }

    /// Normalise raw parameters into a [`ChangeQuery`]
    ///
    /// Absent fields take their defaults: `collected` basis, unbounded range,
    /// page 1, and the configured default page size.
    pub fn normalize(&self, params: ListChangesParams) -> ServiceResult<ChangeQuery> {
        let params = params.cleaned();
        params.validate()?;

        let date_basis = match params.date_basis.as_deref() {
            Some(raw) => raw.parse::<DateBasis>().map_err(|()| DomainError::InvalidEnum {
                field: "date_basis",
                value: raw.to_string(),
            })?,
            None => DateBasis::default(),
        };

        let change_type = params
            .change_type
            .as_deref()
            .map(|raw| {
                raw.parse::<ChangeType>().map_err(|()| DomainError::InvalidEnum {
                    field: "change_type",
                    value: raw.to_string(),
                })
            })
            .transpose()?;

        let start = parse_date("start_date", params.start_date.as_deref())?;
        let end = parse_date("end_date", params.end_date.as_deref())?;
        let range = DateRange::new(start, end)?;

        let page = match params.page.as_deref() {
            Some(raw) => parse_bounded("page", raw, 1, u32::MAX)?,
            None => 1,
        };
        let page_size = match params.page_size.as_deref() {
            Some(raw) => parse_bounded("page_size", raw, 1, self.limits.max_page_size)?,
            None => self.limits.default_page_size,
        };

        Ok(ChangeQuery {
            date_basis,
            range,
            keyword: params.keyword,
            change_type,
            page,
            page_size,
        })
    }
}

fn parse_date(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    raw.map(|value| {
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DomainError::InvalidDate {
            field,
            value: value.to_string(),
        })
    })
    .transpose()
}

fn parse_bounded(field: &str, raw: &str, min: u32, max: u32) -> Result<u32, DomainError> {
    let value: i64 = raw.parse().map_err(|_| {
        DomainError::InvalidPagination(format!("{field} must be an integer, got {raw:?}"))
    })?;

    if value < i64::from(min) || value > i64::from(max) {
        return Err(DomainError::InvalidPagination(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }

    // In range of u32 by the check above
    Ok(value as u32)
}
