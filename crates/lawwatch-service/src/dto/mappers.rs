//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use lawwatch_core::entities::{ArticleDiffItem, LawChangeDetail, LawChangeEvent};
use lawwatch_core::query::ChangePage;
use lawwatch_core::value_objects::ArticleNo;

use super::responses::{
    ArticleDiffResponse, LawChangeDetailResponse, LawChangeListResponse, LawChangeResponse,
};

// ============================================================================
// Change Mappers
// ============================================================================

impl From<LawChangeEvent> for LawChangeResponse {
    fn from(event: LawChangeEvent) -> Self {
        Self {
            change_id: event.change_id.to_string(),
            law_id: event.law_id,
            law_name: event.law_name,
            law_type_name: event.law_type_name,
            ministry_names: event.ministry_names,
            change_type: event.change_type,
            proclamation_no: event.proclamation_no,
            proclamation_date: event.proclamation_date,
            enforce_date: event.enforce_date,
            current_hist_cd: event.current_hist_cd,
            collected_date: event.collected_date,
            change_summary: event.change_summary,
            action_recommendation: event.action_recommendation,
            ai_importance: event.ai_importance,
        }
    }
}

impl From<ChangePage> for LawChangeListResponse {
    fn from(page: ChangePage) -> Self {
        Self {
            items: page.items.into_iter().map(LawChangeResponse::from).collect(),
            total: page.total,
        }
    }
}

// ============================================================================
// Detail Mappers
// ============================================================================

impl From<ArticleDiffItem> for ArticleDiffResponse {
    fn from(item: ArticleDiffItem) -> Self {
        Self {
            diff_id: item.diff_id.to_string(),
            old_no: item.old_no.map(ArticleNo::into_inner),
            old_content: item.old_content,
            new_no: item.new_no.map(ArticleNo::into_inner),
            new_content: item.new_content,
        }
    }
}

impl From<LawChangeDetail> for LawChangeDetailResponse {
    fn from(detail: LawChangeDetail) -> Self {
        Self {
            change: LawChangeResponse::from(detail.change),
            has_old_new: if detail.has_old_new { "Y" } else { "N" }.to_string(),
            old_basic: detail.old_basic,
            new_basic: detail.new_basic,
            articles: detail
                .articles
                .into_iter()
                .map(ArticleDiffResponse::from)
                .collect(),
        }
    }
}
