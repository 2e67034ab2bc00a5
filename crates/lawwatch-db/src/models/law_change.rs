//! Law change event database model

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of `law_change_event` joined with its `law` master record
#[derive(Debug, Clone, FromRow)]
pub struct LawChangeModel {
    pub change_id: Uuid,
    pub law_id: String,
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
