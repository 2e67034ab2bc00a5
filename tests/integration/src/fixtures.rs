//! Test fixtures and data generators
//!
//! The seeded store holds 15 change events:
//!
//! - 1..=12: 근로기준법, 일부개정, promulgated 2024-01-nn, collected
//!   2024-02-nn; even events take effect 2024-06-nn, odd ones have no
//!   enforcement date
//! - 13..=15: 산업안전보건법, 전부개정, not yet promulgated, collected
//!   2024-03-01..03, with a summary
//!
//! Article snapshots exist for events 1 (both sides, with changes),
//! 2 (new side only), and 3 (both sides, identical).

use chrono::NaiveDate;
use lawwatch_core::entities::{Article, ArticleSnapshot, LawChangeEvent};
use lawwatch_core::value_objects::{ArticleSide, ChangeId};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

pub const LABOR_LAW: &str = "근로기준법";
pub const SAFETY_LAW: &str = "산업안전보건법";
pub const SAFETY_SUMMARY: &str = "도급인 안전조치 강화";
pub const EVENT_COUNT: u64 = 15;

/// Event with old and new texts that differ
pub const DIFFED_CHANGE: u128 = 1;
/// Event with only the new text archived
pub const NEW_ONLY_CHANGE: u128 = 2;
/// Event whose old and new texts are identical
pub const UNCHANGED_CHANGE: u128 = 3;

/// Id of the n-th seeded event
pub fn change_id(n: u128) -> ChangeId {
    ChangeId::new(Uuid::from_u128(n))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mst(n: u128) -> String {
    format!("mst-{n}")
}

/// The seeded change events
pub fn seed_events() -> Vec<LawChangeEvent> {
    let mut events = Vec::new();

    for n in 1..=12u32 {
        let id = u128::from(n);
        let mut event = LawChangeEvent::new(change_id(id), "001872", mst(id), LABOR_LAW, date(2024, 2, n));
        event.law_type_name = Some("법률".to_string());
        event.ministry_names = Some("고용노동부".to_string());
        event.change_type = Some("일부개정".to_string());
        event.proclamation_no = Some(format!("{}", 20000 + n));
        event.proclamation_date = Some(date(2024, 1, n));
        event.enforce_date = (n % 2 == 0).then(|| date(2024, 6, n));
        event.current_hist_cd = Some("현행".to_string());
        events.push(event);
    }

    for n in 13..=15u32 {
        let id = u128::from(n);
        let mut event = LawChangeEvent::new(change_id(id), "001766", mst(id), SAFETY_LAW, date(2024, 3, n - 12));
        event.change_type = Some("전부개정".to_string());
        event.change_summary = Some(SAFETY_SUMMARY.to_string());
        event.ai_importance = Some("high".to_string());
        events.push(event);
    }

    events
}

fn snapshot(side: ArticleSide, basic: Value, articles: Vec<Article>) -> ArticleSnapshot {
    ArticleSnapshot::new(side, Some(basic), articles)
}

/// The seeded article snapshots, keyed by registry serial
pub fn seed_snapshots() -> Vec<(String, ArticleSnapshot)> {
    let unchanged = vec![
        Article::new(1, Some("제1조"), Some("제1조(목적) 이 법은 근로조건의 기준을 정한다.")),
        Article::new(2, Some("제2조"), Some("제2조(정의)")),
    ];

    vec![
        (
            mst(DIFFED_CHANGE),
            snapshot(
                ArticleSide::Old,
                json!({"공포번호": "19999", "시행일자": "20230101"}),
                vec![
                    Article::new(1, Some("제1조"), Some("제1조(목적) 이 법은 근로조건의 기준을 정한다.")),
                    Article::new(2, Some("제2조"), Some("제2조(정의) 종전 정의")),
                    Article::new(3, Some("제10조"), Some("제10조(폐지 조항)")),
                ],
            ),
        ),
        (
            mst(DIFFED_CHANGE),
            snapshot(
                ArticleSide::New,
                json!({"공포번호": "20001", "시행일자": "20240101"}),
                vec![
                    Article::new(1, Some("제1조"), Some("제1조(목적) 이 법은 근로조건의 기준을 정한다.\r\n")),
                    Article::new(2, Some("제2조"), Some("제2조(정의) 개정 정의")),
                    Article::new(3, Some("제2조의2"), Some("제2조의2(신설 조항)")),
                ],
            ),
        ),
        (
            mst(NEW_ONLY_CHANGE),
            snapshot(ArticleSide::New, json!({"공포번호": "20002"}), unchanged.clone()),
        ),
        (
            mst(UNCHANGED_CHANGE),
            snapshot(ArticleSide::Old, json!({"공포번호": "19998"}), unchanged.clone()),
        ),
        (
            mst(UNCHANGED_CHANGE),
            snapshot(ArticleSide::New, json!({"공포번호": "20003"}), unchanged),
        ),
    ]
}

/// Change list response
#[derive(Debug, Deserialize)]
pub struct ChangeListBody {
    pub items: Vec<ChangeBody>,
    pub total: u64,
}

/// Change event response
#[derive(Debug, Deserialize)]
pub struct ChangeBody {
    pub change_id: String,
    pub law_name: String,
    pub change_type: Option<String>,
    pub proclamation_date: Option<NaiveDate>,
    pub enforce_date: Option<NaiveDate>,
    pub collected_date: NaiveDate,
    pub change_summary: Option<String>,
}

/// Change detail response
#[derive(Debug, Deserialize)]
pub struct ChangeDetailBody {
    pub change: ChangeBody,
    pub has_old_new: String,
    pub old_basic: Option<Value>,
    pub new_basic: Option<Value>,
    pub articles: Vec<ArticleDiffBody>,
}

/// Article diff response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleDiffBody {
    pub diff_id: String,
    pub old_no: Option<String>,
    pub old_content: Option<String>,
    pub new_no: Option<String>,
    pub new_content: Option<String>,
}
