//! Law change event entity - one amendment occurrence of a statute

use chrono::NaiveDate;

use crate::value_objects::{ChangeId, DateBasis};

/// Law change event entity
///
/// Read-only from this crate's perspective: rows are created by ingestion and
/// the annotation fields (`change_summary`, `action_recommendation`,
/// `ai_importance`) are filled in later by a summarisation process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawChangeEvent {
    pub change_id: ChangeId,
    pub law_id: String,
    /// Registry serial number (MST) of the revision; keys the article snapshots
    pub mst: String,
    pub law_name: String,
    pub law_type_name: Option<String>,
    pub ministry_names: Option<String>,
    pub change_type: Option<String>,
    pub proclamation_no: Option<String>,
    pub proclamation_date: Option<NaiveDate>,
    pub enforce_date: Option<NaiveDate>,
    pub current_hist_cd: Option<String>,
    pub collected_date: NaiveDate,
    pub change_summary: Option<String>,
    pub action_recommendation: Option<String>,
    pub ai_importance: Option<String>,
}

impl LawChangeEvent {
    /// Create a bare event with only its required fields set
    pub fn new(
        change_id: ChangeId,
        law_id: impl Into<String>,
        mst: impl Into<String>,
        law_name: impl Into<String>,
        collected_date: NaiveDate,
    ) -> Self {
        Self {
            change_id,
            law_id: law_id.into(),
            mst: mst.into(),
            law_name: law_name.into(),
            law_type_name: None,
            ministry_names: None,
            change_type: None,
            proclamation_no: None,
            proclamation_date: None,
            enforce_date: None,
            current_hist_cd: None,
            collected_date,
            change_summary: None,
            action_recommendation: None,
            ai_importance: None,
        }
    }

    /// Date this event is filtered and ordered on for the given basis
    pub fn date_for(&self, basis: DateBasis) -> Option<NaiveDate> {
        match basis {
            DateBasis::Promulgation => self.proclamation_date,
            DateBasis::Enforcement => self.enforce_date,
            DateBasis::Collected => Some(self.collected_date),
        }
    }
}
