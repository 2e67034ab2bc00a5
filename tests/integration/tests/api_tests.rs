//! API Integration Tests
//!
//! Each test spawns the full HTTP stack on an ephemeral port over the
//! in-memory stores seeded by `integration_tests::fixtures`.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::HashSet;
use std::time::Duration;

use chrono::NaiveDate;
use integration_tests::{assert_error, assert_json, config_from, fixtures::*, TestServer};
use reqwest::StatusCode;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn list(server: &TestServer, query: &[(&str, &str)]) -> ChangeListBody {
    let response = server.get_query("/api/v1/changes", query).await.expect("Request failed");
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn list_error(server: &TestServer, query: &[(&str, &str)]) -> String {
    let response = server.get_query("/api/v1/changes", query).await.expect("Request failed");
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap()
}

async fn detail(server: &TestServer, n: u128) -> ChangeDetailBody {
    let path = format!("/api/v1/changes/{}", change_id(n));
    let response = server.get(&path).await.expect("Request failed");
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_follows_store() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["store"], "healthy");

    server.store().set_unavailable(true);
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value =
        assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body["status"], "not_ready");
}

// ============================================================================
// Change List Tests
// ============================================================================

#[tokio::test]
async fn test_list_defaults() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = list(&server, &[]).await;

    assert_eq!(body.total, EVENT_COUNT);
    assert_eq!(body.items.len(), 6);
    let ids: Vec<_> = body.items.iter().map(|i| i.change_id.clone()).collect();
    let expected: Vec<_> = [15, 14, 13, 12, 11, 10]
        .into_iter()
        .map(|n| change_id(n).to_string())
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_list_walks_every_page_once() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut seen = HashSet::new();
    let mut returned = 0;
    for page in 1..=4 {
        let page = page.to_string();
        let body = list(&server, &[("page", page.as_str()), ("page_size", "4")]).await;
        assert_eq!(body.total, EVENT_COUNT);
        returned += body.items.len();
        seen.extend(body.items.into_iter().map(|i| i.change_id));
    }

    assert_eq!(returned, 15);
    assert_eq!(seen.len(), 15);

    let past_end = list(&server, &[("page", "5"), ("page_size", "4")]).await;
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, EVENT_COUNT);
}

#[tokio::test]
async fn test_list_keyword_matches_name_and_summary() {
    let server = TestServer::start().await.expect("Failed to start server");

    let by_name = list(&server, &[("keyword", "근로기준"), ("page_size", "100")]).await;
    assert_eq!(by_name.total, 12);
    assert!(by_name.items.iter().all(|i| i.law_name == LABOR_LAW));

    let by_summary = list(&server, &[("keyword", " 안전조치 ")]).await;
    assert_eq!(by_summary.total, 3);
    assert!(by_summary
        .items
        .iter()
        .all(|i| i.change_summary.as_deref() == Some(SAFETY_SUMMARY)));

    let none = list(&server, &[("keyword", "민법")]).await;
    assert_eq!(none.total, 0);
    assert!(none.items.is_empty());
}

#[tokio::test]
async fn test_list_change_type_accepts_code_and_label() {
    let server = TestServer::start().await.expect("Failed to start server");

    let by_code = list(&server, &[("change_type", "full_amendment")]).await;
    assert_eq!(by_code.total, 3);

    let by_label = list(&server, &[("change_type", "전부개정")]).await;
    assert_eq!(by_label.total, 3);
    assert!(by_label
        .items
        .iter()
        .all(|i| i.change_type.as_deref() == Some("전부개정")));
}

#[tokio::test]
async fn test_list_promulgation_range_excludes_pending_events() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = list(
        &server,
        &[
            ("date_basis", "promulgation"),
            ("start_date", "2024-01-01"),
            ("end_date", "2024-01-31"),
            ("page_size", "20"),
        ],
    )
    .await;

    assert_eq!(body.total, 12);
    assert!(body.items.iter().all(|i| i.proclamation_date.is_some()));
    assert_eq!(body.items[0].proclamation_date, Some(date(2024, 1, 12)));
    assert_eq!(body.items[11].proclamation_date, Some(date(2024, 1, 1)));
}

#[tokio::test]
async fn test_list_enforcement_basis() {
    let server = TestServer::start().await.expect("Failed to start server");

    let bounded = list(
        &server,
        &[("date_basis", "enforcement"), ("start_date", "2024-06-01")],
    )
    .await;
    assert_eq!(bounded.total, 6);

    // Unbounded: events without an enforcement date come last
    let all = list(
        &server,
        &[("date_basis", "enforcement"), ("page_size", "100")],
    )
    .await;
    assert_eq!(all.total, EVENT_COUNT);
    assert!(all.items[..6].iter().all(|i| i.enforce_date.is_some()));
    assert!(all.items[6..].iter().all(|i| i.enforce_date.is_none()));
}

#[tokio::test]
async fn test_list_single_day_range() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = list(
        &server,
        &[("start_date", "2024-02-05"), ("end_date", "2024-02-05")],
    )
    .await;
    assert_eq!(body.total, 1);
    assert_eq!(body.items[0].collected_date, date(2024, 2, 5));
}

#[tokio::test]
async fn test_list_serializes_missing_fields_as_null() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_query("/api/v1/changes", &[("change_type", "full_amendment")])
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let item = &body["items"][0];

    let fields = item.as_object().unwrap();
    for key in ["proclamation_date", "enforce_date", "law_type_name", "action_recommendation"] {
        assert!(fields.contains_key(key), "{key} missing");
        assert!(fields[key].is_null(), "{key} not null");
    }
}

#[tokio::test]
async fn test_list_rejects_invalid_filters() {
    let server = TestServer::start().await.expect("Failed to start server");

    let cases: Vec<(Vec<(&str, &str)>, &str)> = vec![
        (vec![("start_date", "2024-02-01"), ("end_date", "2024-01-01")], "INVALID_DATE_RANGE"),
        (vec![("start_date", "2024-02-30")], "INVALID_DATE"),
        (vec![("end_date", "01/31/2024")], "INVALID_DATE"),
        (vec![("date_basis", "published")], "INVALID_ENUM"),
        (vec![("change_type", "rewrite")], "INVALID_ENUM"),
        (vec![("page", "0")], "INVALID_PAGINATION"),
        (vec![("page", "two")], "INVALID_PAGINATION"),
        (vec![("page_size", "101")], "INVALID_PAGINATION"),
        (vec![("page_size", "0")], "INVALID_PAGINATION"),
    ];

    for (query, expected) in &cases {
        assert_eq!(list_error(&server, query).await, *expected, "{query:?}");
    }
}

#[tokio::test]
async fn test_list_rejects_long_keyword_with_details() {
    let server = TestServer::start().await.expect("Failed to start server");

    let keyword = "가".repeat(201);
    let response = server
        .get_query("/api/v1/changes", &[("keyword", keyword.as_str())])
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["keyword"].is_array());
}

#[tokio::test]
async fn test_list_store_unavailable() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store().set_unavailable(true);

    let response = server.get("/api/v1/changes").await.unwrap();
    let code = assert_error(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(code, "STORE_UNAVAILABLE");
}

// ============================================================================
// Change Detail Tests
// ============================================================================

#[tokio::test]
async fn test_detail_with_article_diffs() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = detail(&server, DIFFED_CHANGE).await;

    assert_eq!(body.change.change_id, change_id(DIFFED_CHANGE).to_string());
    assert_eq!(body.has_old_new, "Y");
    assert_eq!(body.old_basic.as_ref().unwrap()["공포번호"], "19999");
    assert_eq!(body.new_basic.as_ref().unwrap()["공포번호"], "20001");

    let pairs: Vec<_> = body
        .articles
        .iter()
        .map(|a| (a.old_no.as_deref(), a.new_no.as_deref()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Some("제2조"), Some("제2조")),
            (None, Some("제2조의2")),
            (Some("제10조"), None),
        ]
    );

    let removed = &body.articles[2];
    assert!(removed.new_content.is_none());
    assert_eq!(removed.old_content.as_deref(), Some("제10조(폐지 조항)"));

    let ids: HashSet<_> = body.articles.iter().map(|a| a.diff_id.clone()).collect();
    assert_eq!(ids.len(), body.articles.len());
}

#[tokio::test]
async fn test_detail_is_stable_across_requests() {
    let server = TestServer::start().await.expect("Failed to start server");

    let first = detail(&server, DIFFED_CHANGE).await;
    let second = detail(&server, DIFFED_CHANGE).await;
    assert_eq!(first.articles, second.articles);
}

#[tokio::test]
async fn test_detail_without_old_text() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = detail(&server, NEW_ONLY_CHANGE).await;
    assert_eq!(body.has_old_new, "N");
    assert!(body.articles.is_empty());
    assert!(body.old_basic.is_none());
    assert!(body.new_basic.is_some());
}

#[tokio::test]
async fn test_detail_without_differences() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = detail(&server, UNCHANGED_CHANGE).await;
    assert_eq!(body.has_old_new, "Y");
    assert!(body.articles.is_empty());
}

#[tokio::test]
async fn test_detail_without_snapshots() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = detail(&server, 14).await;
    assert_eq!(body.has_old_new, "N");
    assert!(body.articles.is_empty());
    assert!(body.old_basic.is_none());
    assert!(body.new_basic.is_none());
}

#[tokio::test]
async fn test_detail_unknown_and_malformed_ids() {
    let server = TestServer::start().await.expect("Failed to start server");

    let path = format!("/api/v1/changes/{}", change_id(999));
    let response = server.get(&path).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "CHANGE_NOT_FOUND");

    let response = server.get("/api/v1/changes/12345").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "CHANGE_NOT_FOUND");
}

// ============================================================================
// Deadline Tests
// ============================================================================

#[tokio::test]
async fn test_client_deadline_exceeded() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store().set_latency(Duration::from_millis(500));

    let response = server
        .get_with_deadline("/api/v1/changes", "50")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::GATEWAY_TIMEOUT).await.unwrap();
    assert_eq!(code, "DEADLINE_EXCEEDED");
}

#[tokio::test]
async fn test_server_timeout_caps_client_deadline() {
    let config = config_from(&[("REQUEST_TIMEOUT_MS", "100")]).unwrap();
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    server.store().set_latency(Duration::from_millis(500));

    let path = format!("/api/v1/changes/{}", change_id(DIFFED_CHANGE));
    let response = server.get_with_deadline(&path, "60000").await.unwrap();
    let code = assert_error(response, StatusCode::GATEWAY_TIMEOUT).await.unwrap();
    assert_eq!(code, "DEADLINE_EXCEEDED");
}

#[tokio::test]
async fn test_generous_deadline_succeeds() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store().set_latency(Duration::from_millis(20));

    let response = server
        .get_with_deadline("/api/v1/changes", "5000")
        .await
        .unwrap();
    let body: ChangeListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.total, EVENT_COUNT);
}

#[tokio::test]
async fn test_invalid_deadline_header() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_with_deadline("/api/v1/changes", "soon")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_HEADER");
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/changes").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
