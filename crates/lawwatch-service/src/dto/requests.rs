//! Request DTOs for API endpoints
//!
//! Query parameters arrive as strings so that malformed values surface as
//! typed domain errors from the normaliser instead of generic rejections.

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Raw filter set of the change list endpoint
///
/// Every field is trimmed on deserialisation; blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ListChangesParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_date: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_date: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 200, message = "Keyword must be at most 200 characters"))]
    pub keyword: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub change_type: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub date_basis: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub page_size: Option<String>,
}

impl ListChangesParams {
    /// Apply the trimming rules to values that did not come through serde
    pub fn cleaned(self) -> Self {
        Self {
            start_date: clean(self.start_date),
            end_date: clean(self.end_date),
            keyword: clean(self.keyword),
            change_type: clean(self.change_type),
            date_basis: clean(self.date_basis),
            page: clean(self.page),
            page_size: clean(self.page_size),
        }
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(clean)
}
