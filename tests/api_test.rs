//! Tests for the HTTP endpoints

use std::sync::Arc;

use aircon_advisor::api::create_router_with_state;
use aircon_advisor::domain::InMemoryCatalogRepository;
use aircon_advisor::infrastructure::storage::StorageFactory;
use aircon_advisor::create_app_state_with_repository;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

/// Router over the built-in catalog
fn create_test_router() -> Router {
    let state = create_app_state_with_repository(StorageFactory::create_in_memory(), 5);
    create_router_with_state(state)
}

/// Router over a catalog with no rows
fn create_empty_router() -> Router {
    let state = create_app_state_with_repository(Arc::new(InMemoryCatalogRepository::new()), 5);
    create_router_with_state(state)
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

fn model_numbers(json: &Value) -> Vec<&str> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|m| m["model_number"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = send(
        create_test_router(),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_ready_endpoint_reports_catalog() {
    let (status, json) = send(
        create_test_router(),
        Request::builder().uri("/ready").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["checks"][0]["name"], "catalog");
    assert_eq!(json["checks"][0]["status"], "healthy");
}

#[tokio::test]
async fn test_ready_endpoint_degraded_when_catalog_empty() {
    let (status, json) = send(
        create_empty_router(),
        Request::builder().uri("/ready").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn test_search_by_area_groups_by_brand_then_price() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/search_by_area", "area=5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        model_numbers(&json),
        vec!["ARF28NVLT", "RXV28VVLT", "RXV36VVLT", "RAC-28JP", "CU-K36FCA2"]
    );
}

#[tokio::test]
async fn test_search_by_area_with_brand_orders_by_price() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/search_by_area", "area=5&brand=Daikin"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        model_numbers(&json),
        vec!["ARF28NVLT", "RXV28VVLT", "RXV36VVLT"]
    );
    assert_eq!(json[0]["suitable_area"], "4~5");
    assert_eq!(json[0]["type"], "window");
}

#[tokio::test]
async fn test_search_by_area_blank_brand_means_no_filter() {
    let (_, json) = send(
        create_test_router(),
        form_request("/api/search_by_area", "area=5&brand="),
    )
    .await;

    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_search_by_area_no_match_is_empty_array() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/search_by_area", "area=100"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(vec![]));
}

#[tokio::test]
async fn test_search_by_area_rejects_non_numeric_area() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/search_by_area", "area=big"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["type"], "invalid_request_error");
    assert_eq!(json["error"]["param"], "area");
}

#[tokio::test]
async fn test_search_by_area_rejects_negative_area() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/search_by_area", "area=-3"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["param"], "area");
}

#[tokio::test]
async fn test_search_by_price_bounds_are_inclusive() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/search_by_price", "min_price=28900&max_price=31900"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        model_numbers(&json),
        vec!["RXV28VVLT", "RAC-28JP", "CU-K36FCA2"]
    );
}

#[tokio::test]
async fn test_search_by_price_inverted_range_is_empty() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/search_by_price", "min_price=50000&max_price=20000"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_by_price_requires_both_bounds() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/search_by_price", "min_price=20000"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["param"], "max_price");
}

#[tokio::test]
async fn test_calculate_plain_room() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/calculate", "area=10"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["capacity"], 5.0);
    assert_eq!(
        model_numbers(&json["suggestions"]),
        vec!["CU-K50FCA2", "RXM50VVLT", "RXM60VVLT", "RAC-63JP", "RXM71VVLT"]
    );
    assert!(json.get("advisory").is_none());
}

#[tokio::test]
async fn test_calculate_all_adjustments() {
    let (status, json) = send(
        create_test_router(),
        form_request(
            "/api/calculate",
            "area=10&height=3.5&room_type=kitchen&direction=south&windows=on",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["capacity"], 9.1);
    assert_eq!(model_numbers(&json["suggestions"]), vec!["FCQ140LUV"]);
}

#[tokio::test]
async fn test_calculate_accepts_chinese_labels() {
    let (status, json) = send(
        create_test_router(),
        form_request(
            "/api/calculate",
            "area=8&room_type=%E9%9B%BB%E8%85%A6%E5%AE%A4&direction=%E6%9D%B1%E8%A5%BF%E5%90%91",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["capacity"], 6.2);
}

#[tokio::test]
async fn test_calculate_falls_back_to_largest_with_advisory() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/calculate", "area=40"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["capacity"], 20.0);
    assert_eq!(model_numbers(&json["suggestions"]), vec!["FCQ140LUV"]);
    assert!(json["advisory"].as_str().unwrap().contains("multiple units"));
}

#[tokio::test]
async fn test_calculate_empty_catalog() {
    let (status, json) = send(
        create_empty_router(),
        form_request("/api/calculate", "area=10"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["suggestions"].as_array().unwrap().is_empty());
    assert!(json.get("advisory").is_none());
}

#[tokio::test]
async fn test_calculate_rejects_excessive_height() {
    let (status, json) = send(
        create_test_router(),
        form_request("/api/calculate", "area=10&height=50"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["param"], "height");
}

#[tokio::test]
async fn test_series_endpoint() {
    let (status, json) = send(
        create_test_router(),
        Request::builder()
            .uri("/api/series")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let series = json.as_array().unwrap();
    assert_eq!(series.len(), 7);
    assert_eq!(series[0]["series_name"], "Classic Inverter");
    assert!(series[0]["feature_description"].is_string());
}

#[tokio::test]
async fn test_wrong_content_type_is_json_error() {
    let (status, json) = send(
        create_test_router(),
        Request::builder()
            .method("POST")
            .uri("/api/search_by_area")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"area": 5}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["error"]["code"], "form_parse_error");
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let response = create_test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}
