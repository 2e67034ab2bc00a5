//! LawChangeEvent entity <-> model mapper

use lawwatch_core::entities::LawChangeEvent;
use lawwatch_core::value_objects::ChangeId;

use crate::models::LawChangeModel;

/// Convert LawChangeModel to LawChangeEvent entity
impl From<LawChangeModel> for LawChangeEvent {
    fn from(model: LawChangeModel) -> Self {
        LawChangeEvent {
            change_id: ChangeId::new(model.change_id),
            law_id: model.law_id,
            mst: model.mst,
            law_name: model.law_name,
            law_type_name: model.law_type_name,
            ministry_names: model.ministry_names,
            change_type: model.change_type,
            proclamation_no: model.proclamation_no,
            proclamation_date: model.proclamation_date,
            enforce_date: model.enforce_date,
            current_hist_cd: model.current_hist_cd,
            collected_date: model.collected_date,
            change_summary: model.change_summary,
            action_recommendation: model.action_recommendation,
            ai_importance: model.ai_importance,
        }
    }
}
