//! Change ID - stable identifier of a law change event
//!
//! Backed by a UUID. The same id always resolves to the same logical event,
//! although its annotation fields may be enriched later.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a [`LawChangeEvent`](crate::entities::LawChangeEvent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeId(Uuid);

impl ChangeId {
    /// Wrap a raw UUID
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, ChangeIdParseError> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ChangeIdParseError::InvalidFormat)
    }

    /// Derive a stable child id scoped to this change.
    ///
    /// Used to give each article diff item an identifier that is unique within
    /// the change and identical across retrievals.
    pub fn derive(&self, name: &str) -> Uuid {
        Uuid::new_v5(&self.0, name.as_bytes())
    }
}

/// Error when parsing a ChangeId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChangeIdParseError {
    #[error("invalid change id format")]
    InvalidFormat,
}

impl fmt::Display for ChangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChangeId {
    type Err = ChangeIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ChangeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ChangeId> for Uuid {
    fn from(id: ChangeId) -> Self {
        id.0
    }
}
