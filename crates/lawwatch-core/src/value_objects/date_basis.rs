//! Date basis - which legal or system date a range filter applies to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date axis used for range filtering and ordering of change events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateBasis {
    /// Formal publication date (`proclamation_date`)
    Promulgation,
    /// Date the amendment takes effect (`enforce_date`)
    Enforcement,
    /// Date this system ingested the event (`collected_date`)
    #[default]
    Collected,
}

impl DateBasis {
    /// Wire name of this basis
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Promulgation => "promulgation",
            Self::Enforcement => "enforcement",
            Self::Collected => "collected",
        }
    }

    /// Name of the `law_change_event` column this basis filters on
    pub fn column(&self) -> &'static str {
        match self {
            Self::Promulgation => "proclamation_date",
            Self::Enforcement => "enforce_date",
            Self::Collected => "collected_date",
        }
    }
}

impl fmt::Display for DateBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateBasis {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "promulgation" => Ok(Self::Promulgation),
            "enforcement" => Ok(Self::Enforcement),
            "collected" => Ok(Self::Collected),
            _ => Err(()),
        }
    }
}
