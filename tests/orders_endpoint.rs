//! In-process tests of the orders router, driven with `oneshot`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use order_service::http::X_REQUEST_ID;
use tower::ServiceExt;

mod common;

use common::{body_string, get, router_at, FAILURE_BODY, ORDERS_BODY};

#[tokio::test]
async fn test_even_minute_returns_injected_failure() {
    let response = router_at(14).oneshot(get("/orders")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_string(response).await, FAILURE_BODY);
}

#[tokio::test]
async fn test_odd_minute_returns_sample_orders() {
    let response = router_at(15).oneshot(get("/orders")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_string(response).await, ORDERS_BODY);
}

#[tokio::test]
async fn test_every_minute_of_the_hour() {
    for minute in 0..60 {
        let response = router_at(minute).oneshot(get("/orders")).await.unwrap();
        let expected = if minute % 2 == 0 {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };
        assert_eq!(response.status(), expected, "minute {minute}");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "minute {minute}"
        );
    }
}

#[tokio::test]
async fn test_same_minute_is_idempotent() {
    let router = router_at(33);

    let first = router.clone().oneshot(get("/orders")).await.unwrap();
    let second = router.oneshot(get("/orders")).await.unwrap();

    assert_eq!(first.status(), second.status());
    assert_eq!(body_string(first).await, body_string(second).await);
}

#[tokio::test]
async fn test_any_method_and_request_content_is_ignored() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/orders?status=PAID")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"id":"ORD-999"}"#))
        .unwrap();

    let response = router_at(1).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, ORDERS_BODY);
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let response = router_at(1).oneshot(get("/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_string(response).await, r#"{"error":"Not found"}"#);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let response = router_at(1).oneshot(get("/orders")).await.unwrap();

    let id = response.headers()[X_REQUEST_ID].to_str().unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let request = Request::builder()
        .uri("/orders")
        .header(X_REQUEST_ID, "client-supplied-id")
        .body(Body::empty())
        .unwrap();

    let response = router_at(2).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[X_REQUEST_ID], "client-supplied-id");
}
