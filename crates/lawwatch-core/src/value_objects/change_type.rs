//! Change type - recognised amendment kinds of the statute registry
//!
//! The registry reports the kind as a Korean label (제개정구분명). Events keep
//! whatever text was stored; filters accept either the English code or the
//! label and match stored values against every alias of the kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amendment kind used by the `change_type` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// 제정
    Enactment,
    /// 일부개정
    Amendment,
    /// 전부개정
    FullAmendment,
    /// 폐지
    Repeal,
    /// 타법개정
    AmendmentByOtherAct,
    /// 타법폐지
    RepealByOtherAct,
    /// 폐지제정
    RepealAndEnactment,
}

impl ChangeType {
    pub const ALL: [Self; 7] = [
        Self::Enactment,
        Self::Amendment,
        Self::FullAmendment,
        Self::Repeal,
        Self::AmendmentByOtherAct,
        Self::RepealByOtherAct,
        Self::RepealAndEnactment,
    ];

    /// English wire code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Enactment => "enactment",
            Self::Amendment => "amendment",
            Self::FullAmendment => "full_amendment",
            Self::Repeal => "repeal",
            Self::AmendmentByOtherAct => "amendment_by_other_act",
            Self::RepealByOtherAct => "repeal_by_other_act",
            Self::RepealAndEnactment => "repeal_and_enactment",
        }
    }

    /// Registry label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Enactment => "제정",
            Self::Amendment => "일부개정",
            Self::FullAmendment => "전부개정",
            Self::Repeal => "폐지",
            Self::AmendmentByOtherAct => "타법개정",
            Self::RepealByOtherAct => "타법폐지",
            Self::RepealAndEnactment => "폐지제정",
        }
    }

    /// Check whether a stored `change_type` value denotes this kind
    pub fn matches(&self, stored: &str) -> bool {
        let stored = stored.trim();
        stored == self.label() || stored.eq_ignore_ascii_case(self.code())
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ChangeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.matches(s))
            .ok_or(())
    }
}
