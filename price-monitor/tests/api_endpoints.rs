use std::sync::Arc;

use axum::body::Body;
use chrono::NaiveDate;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use price_monitor::{
    Config, DataError, MemoryDataSource, PriceDataSource, ServerState, build_app,
};
use serde_json::{Value, json};
use shared::models::{HistoryPoint, PriceComparison, Product};
use tower::ServiceExt;

const LEAKY: &str = "pg at 10.1.2.3 rejected password hunter2";

/// Data source whose every call fails with internal detail in the message
struct FailingSource;

impl PriceDataSource for FailingSource {
    fn internal_products(&self) -> Result<Vec<Product>, DataError> {
        Err(DataError::unavailable(LEAKY))
    }

    fn history_data(&self, _product_id: &str) -> Result<Vec<HistoryPoint>, DataError> {
        Err(DataError::unavailable(LEAKY))
    }

    fn price_comparisons(&self) -> Result<Vec<PriceComparison>, DataError> {
        Err(DataError::unavailable(LEAKY))
    }

    fn toggle_special_attention(&self, _id: &str) -> Result<bool, DataError> {
        Err(DataError::unavailable(LEAKY))
    }
}

fn seeded_state() -> ServerState {
    let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    ServerState::new(Config::default(), Arc::new(MemoryDataSource::seeded(end)))
}

fn failing_state() -> ServerState {
    ServerState::new(Config::default(), Arc::new(FailingSource))
}

async fn send(state: &ServerState, method: &str, uri: &str) -> (StatusCode, Value) {
    let app = build_app().with_state(state.clone());
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(state: &ServerState, uri: &str) -> (StatusCode, Value) {
    send(state, "GET", uri).await
}

fn ids(rows: &Value) -> Vec<&str> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_products_list() {
    let (status, body) = get(&seeded_state(), "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 6);
    assert_eq!(products[0]["id"], "TOP001");
    assert_eq!(products[0]["ourPrice"], 52.0);
    // TOP003 has no tags upstream
    assert_eq!(products[2]["tags"], json!([]));
}

#[tokio::test]
async fn test_products_failure_is_opaque_500() {
    let (status, body) = get(&failing_state(), "/api/products").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch products" }));
    assert!(!body.to_string().contains("hunter2"));
}

#[tokio::test]
async fn test_history_defaults_to_top001() {
    let state = seeded_state();
    let (status, default_body) = get(&state, "/api/history").await;
    let (_, empty_body) = get(&state, "/api/history?productId=").await;
    let (_, explicit_body) = get(&state, "/api/history?productId=TOP001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(default_body, explicit_body);
    assert_eq!(empty_body, explicit_body);
    assert_eq!(explicit_body.as_array().unwrap().len(), 30);
    assert_eq!(explicit_body[29]["date"], "2024-06-30");
}

#[tokio::test]
async fn test_history_of_other_product() {
    let state = seeded_state();
    let (status, body) = get(&state, "/api/history?productId=TOP002").await;
    let (_, default_body) = get(&state, "/api/history").await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(body, default_body);
    assert!(body[0].get("xsjPrice").is_some());
}

#[tokio::test]
async fn test_history_repeated_product_id_uses_first() {
    let state = seeded_state();
    let (status, body) = get(&state, "/api/history?productId=TOP001&productId=TOP002").await;
    let (_, top001) = get(&state, "/api/history?productId=TOP001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, top001);
}

#[tokio::test]
async fn test_history_failure_is_opaque_500() {
    let (status, body) = get(&failing_state(), "/api/history?productId=TOP002").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch history data" }));
}

#[tokio::test]
async fn test_alert_rows_are_classified_and_rendered() {
    let (status, body) = get(&seeded_state(), "/api/alerts").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 6);

    let top001 = &rows[0];
    assert_eq!(top001["type"], "INVERSION");
    assert_eq!(top001["status"]["text"], "价格倒挂");
    assert_eq!(top001["status"]["tone"], "warning");
    assert_eq!(top001["gap"]["text"], "+5.20");
    assert_eq!(top001["gap"]["tone"], "danger");
    assert_eq!(top001["xsjPrice"], "-");
    assert_eq!(top001["ourPrice"], "¥52.00");

    // Cost based: 56.5 is under 55 * 1.05
    let top004 = &rows[3];
    assert_eq!(top004["type"], "INVERSION");
    assert_eq!(top004["gap"]["text"], "+9.50");

    let top003 = &rows[2];
    assert_eq!(top003["type"], "ADVANTAGE");
    assert_eq!(top003["gap"]["text"], "-1.40");
    assert_eq!(top003["gap"]["tone"], "safe");
    assert_eq!(top003["status"]["tone"], "success");

    // No competitor data at all
    let top005 = &rows[4];
    assert_eq!(top005["type"], "ADVANTAGE");
    assert_eq!(top005["gap"]["text"], "0.00");
    assert_eq!(top005["jdPrice"], "-");
}

#[tokio::test]
async fn test_alert_filters() {
    let state = seeded_state();

    let (_, body) = get(&state, "/api/alerts?type=LOSING").await;
    assert_eq!(ids(&body), vec!["TOP002", "TOP006"]);

    // tag=新品
    let (_, body) = get(&state, "/api/alerts?type=INVERSION&tag=%E6%96%B0%E5%93%81").await;
    assert_eq!(ids(&body), vec!["TOP004"]);

    let (_, body) = get(&state, "/api/alerts?type=ALL").await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_alert_filter_rejects_unknown_type() {
    let (status, body) = get(&seeded_state(), "/api/alerts?type=CLEARANCE").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("CLEARANCE"));
}

#[tokio::test]
async fn test_alert_query_rejection_is_json_400() {
    let (status, body) = get(&seeded_state(), "/api/alerts?special=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("special"));
}

#[tokio::test]
async fn test_alerts_failure_is_opaque_500() {
    let (status, body) = get(&failing_state(), "/api/alerts").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch price alerts" }));
}

#[tokio::test]
async fn test_toggle_attention_round_trip() {
    let state = seeded_state();

    let (status, body) = send(&state, "POST", "/api/alerts/TOP002/attention").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "TOP002", "isSpecial": true }));

    let (_, body) = get(&state, "/api/alerts?special=true").await;
    assert_eq!(ids(&body), vec!["TOP002"]);
    assert_eq!(body[0]["attention"]["icon"], "filled");

    let (_, body) = send(&state, "POST", "/api/alerts/TOP002/attention").await;
    assert_eq!(body["isSpecial"], false);
}

#[tokio::test]
async fn test_toggle_attention_unknown_id() {
    let (status, body) = send(&seeded_state(), "POST", "/api/alerts/NOPE/attention").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_toggle_attention_failure_is_opaque_500() {
    let (status, body) = send(&failing_state(), "POST", "/api/alerts/TOP002/attention").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to toggle special attention" }));
}

#[tokio::test]
async fn test_filter_options_start_with_all() {
    let (status, body) = get(&seeded_state(), "/api/filters").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["tags"][0], json!({ "label": "全部标签", "value": "ALL" }));
    let tags: Vec<&str> = body["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["ALL", "爆品", "新品"]);

    assert_eq!(body["categories"][0]["value"], "ALL");
    assert_eq!(body["alertTypes"][0]["value"], "ALL");
    assert_eq!(body["alertTypes"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_columns_navigation_and_health() {
    let state = seeded_state();

    let (_, columns) = get(&state, "/api/alerts/columns").await;
    assert_eq!(columns.as_array().unwrap().len(), 10);
    assert_eq!(columns[0]["key"], "product");
    assert_eq!(columns[9]["key"], "attention");

    let (_, nav) = get(&state, "/api/navigation").await;
    assert_eq!(nav[0], json!({ "path": "/", "label": "数据总览", "icon": "dashboard" }));

    let (status, health) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let app = build_app().with_state(seeded_state());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
