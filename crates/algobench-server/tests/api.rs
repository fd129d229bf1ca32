//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use algobench_core::limits::Limits;
use algobench_server::{app, AppState};

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(AppState::default(), request).await
}

async fn post(uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(AppState::default(), request).await
}

#[tokio::test]
async fn health() {
    let (status, json) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn fibonacci_every_strategy() {
    for strategy in ["recursive", "memoization", "iterative"] {
        let (status, json) = get(&format!("/api/fibonacci/{strategy}/30")).await;
        assert_eq!(status, StatusCode::OK, "{strategy}");
        assert_eq!(json["result"], 832_040, "{strategy}");
        assert!(json["executionTimeMs"].as_f64().unwrap() >= 0.0);
        assert!(json.get("memoryUsedBytes").is_none());
    }
}

#[tokio::test]
async fn fibonacci_without_api_prefix() {
    let (status, json) = get("/fibonacci/iterative/10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], 55);
}

#[tokio::test]
async fn fibonacci_largest_u64() {
    let (status, json) = get("/api/fibonacci/iterative/93").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"].as_u64(), Some(12_200_160_415_121_876_738));
}

#[tokio::test]
async fn fibonacci_negative_is_bad_request() {
    let (status, json) = get("/api/fibonacci/iterative/-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("invalid input"));
}

#[tokio::test]
async fn fibonacci_overflow_is_bad_request() {
    let (status, json) = get("/api/fibonacci/memoization/94").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("overflows"));
}

#[tokio::test]
async fn fibonacci_non_numeric_n() {
    let (status, json) = get("/api/fibonacci/iterative/ten").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn fibonacci_recursive_limit() {
    let (status, json) = get("/api/fibonacci/recursive/60").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn fibonacci_unknown_strategy() {
    let (status, json) = get("/api/fibonacci/matrix/10").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "unknown strategy: matrix");
}

#[tokio::test]
async fn fibonacci_timeout() {
    let state = AppState {
        limits: Limits::unbounded(),
        timeout: Duration::from_millis(20),
        ..AppState::default()
    };
    let request = Request::get("/api/fibonacci/recursive/90")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(state, request).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert!(json["error"].as_str().unwrap().contains("timed out"));
}

#[tokio::test]
async fn max_subarray_every_strategy() {
    for strategy in ["bruteforce", "dp", "kadane"] {
        let (status, json) = post(
            &format!("/api/max-subarray/{strategy}"),
            "[-2, 1, -3, 4, -1, 2, 1, -5, 4]",
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{strategy}");
        assert_eq!(json["result"], 6, "{strategy}");
    }
}

#[tokio::test]
async fn max_subarray_all_negative() {
    let (status, json) = post("/max-subarray/kadane", "[-3, -1, -2]").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], -1);
}

#[tokio::test]
async fn max_subarray_sum_wider_than_i32() {
    let (status, json) = post("/max-subarray/dp", "[2147483647, 2147483647]").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], 4_294_967_294_i64);
}

#[tokio::test]
async fn max_subarray_empty_and_null() {
    for body in ["[]", "null", ""] {
        let (status, json) = post("/api/max-subarray/kadane", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(json["error"], "Input array cannot be null or empty");
    }
}

#[tokio::test]
async fn max_subarray_malformed_body() {
    let (status, json) = post("/api/max-subarray/kadane", "[1, 2,").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("invalid JSON body"));
}

#[tokio::test]
async fn max_subarray_unknown_strategy() {
    let (status, _) = post("/api/max-subarray/divide-and-conquer", "[1]").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn max_subarray_brute_force_limit() {
    let state = AppState {
        limits: Limits {
            max_brute_force_len: 4,
            ..Limits::default()
        },
        ..AppState::default()
    };
    let request = Request::post("/api/max-subarray/bruteforce")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[1, 2, 3, 4, 5]"))
        .unwrap();
    let (status, _) = send(state, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let request = Request::get("/api/max-subarray/kadane")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(AppState::default(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route() {
    let (status, json) = get("/api/quicksort/10").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "no such route");
}
