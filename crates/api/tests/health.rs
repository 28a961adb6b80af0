//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, delete, get, patch_json, post_raw};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["schema_ready"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_without_schema() {
    let pool = taskboard_db::create_in_memory_pool().await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["schema_ready"], false);
}

#[tokio::test]
async fn health_check_reports_degraded_when_pool_closed() {
    let pool = common::test_pool().await;
    pool.close().await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert_eq!(json["schema_ready"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_carries_request_id() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/health").await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn malformed_json_returns_422_envelope() {
    let app = common::build_test_app(common::test_pool().await);
    let response = post_raw(app, "/api/projects", "{not json").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BODY");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_returns_415() {
    let app = common::build_test_app(common::test_pool().await);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/projects")
        .body(Body::from(r#"{"project_name":"x"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body_json(response).await["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn put_is_not_routed() {
    let app = common::build_test_app(common::test_pool().await);
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/projects/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn non_integer_id_returns_422_envelope() {
    let app = common::build_test_app(common::test_pool().await);

    let response = get(app.clone(), "/api/projects/abc").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_PATH");
    assert!(json["error"].is_string());

    let response = patch_json(app.clone(), "/api/tasks/abc", json!({"is_complete": true})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "INVALID_PATH");

    let response = delete(app, "/api/tasks/1.5").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "INVALID_PATH");
}
