//! Change list query - the canonical, already-validated filter set
//!
//! Stores translate this into their own query language; [`ChangeQuery::matches`]
//! and [`ChangeQuery::compare`] define the semantics every store must honour.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::entities::LawChangeEvent;
use crate::error::DomainError;
use crate::value_objects::{ChangeType, DateBasis};

/// Inclusive date bounds; an absent bound is open in that direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, DomainError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(DomainError::InvalidDateRange { start: s, end: e });
            }
        }
        Ok(Self { start, end })
    }

    /// A range with neither bound
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check a possibly-missing date against the range.
    ///
    /// A missing date only passes when no bound is set.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        match date {
            None => self.is_unbounded(),
            Some(d) => {
                self.start.is_none_or(|s| d >= s) && self.end.is_none_or(|e| d <= e)
            }
        }
    }
}

/// Page size bounds applied while normalising list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationLimits {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl PaginationLimits {
    pub const DEFAULT_PAGE_SIZE: u32 = 6;
    pub const MAX_PAGE_SIZE: u32 = 100;
}

impl Default for PaginationLimits {
    fn default() -> Self {
        Self {
            default_page_size: Self::DEFAULT_PAGE_SIZE,
            max_page_size: Self::MAX_PAGE_SIZE,
        }
    }
}

/// Validated list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeQuery {
    pub date_basis: DateBasis,
    pub range: DateRange,
    /// Trimmed, non-empty search text
    pub keyword: Option<String>,
    pub change_type: Option<ChangeType>,
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
}

impl Default for ChangeQuery {
    fn default() -> Self {
        Self {
            date_basis: DateBasis::default(),
            range: DateRange::unbounded(),
            keyword: None,
            change_type: None,
            page: 1,
            page_size: PaginationLimits::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ChangeQuery {
    /// Number of rows to skip
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.page_size)
    }

    /// Number of rows in a page
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Filter predicate shared by every store
    pub fn matches(&self, event: &LawChangeEvent) -> bool {
        if !self.range.contains(event.date_for(self.date_basis)) {
            return false;
        }

        if let Some(kind) = self.change_type {
            if !event.change_type.as_deref().is_some_and(|t| kind.matches(t)) {
                return false;
            }
        }

        if let Some(keyword) = &self.keyword {
            let needle = keyword.to_lowercase();
            let hit = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&needle));
            if !hit(Some(&event.law_name)) && !hit(event.change_summary.as_deref()) {
                return false;
            }
        }

        true
    }

    /// Result ordering: basis date descending with missing dates last, then id ascending
    pub fn compare(&self, a: &LawChangeEvent, b: &LawChangeEvent) -> Ordering {
        let (da, db) = (a.date_for(self.date_basis), b.date_for(self.date_basis));
        let by_date = match (da, db) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_date.then_with(|| a.change_id.cmp(&b.change_id))
    }
}

/// One page of matching events plus the size of the whole match set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangePage {
    pub items: Vec<LawChangeEvent>,
    pub total: u64,
}

impl ChangePage {
    pub fn new(items: Vec<LawChangeEvent>, total: u64) -> Self {
        Self { items, total }
    }
}
