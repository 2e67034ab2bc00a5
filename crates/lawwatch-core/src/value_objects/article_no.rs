//! Article numbers and snapshot sides
//!
//! Article numbers are free text (`제2조`, `제2조의2`, `부칙 제1조`). They pair
//! by exact (trimmed) text and order naturally: digit groups compare as numbers,
//! so `제2조` < `제2조의2` < `제10조`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Article number with natural ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleNo(String);

impl ArticleNo {
    /// Create an article number, trimming surrounding whitespace.
    ///
    /// Returns `None` for blank input; an article without a number never pairs.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Numeric groups in reading order (`제2조의3` -> `[2, 3]`)
    fn numeric_key(&self) -> Vec<u64> {
        let mut groups = Vec::new();
        let mut current: Option<u64> = None;

        for c in self.0.chars() {
            if let Some(d) = c.to_digit(10) {
                let value = current.unwrap_or(0);
                current = Some(value.saturating_mul(10).saturating_add(u64::from(d)));
            } else if let Some(value) = current.take() {
                groups.push(value);
            }
        }
        if let Some(value) = current {
            groups.push(value);
        }

        groups
    }
}

impl Ord for ArticleNo {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.numeric_key(), other.numeric_key());
        // Numbers without any digits sort after numbered ones
        a.is_empty()
            .cmp(&b.is_empty())
            .then_with(|| a.cmp(&b))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ArticleNo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ArticleNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of a change an article snapshot describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleSide {
    /// Text as it stood immediately before the change
    Old,
    /// Text as it stands immediately after the change
    New,
}

impl ArticleSide {
    /// Value stored in the `side` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }
}

impl fmt::Display for ArticleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
