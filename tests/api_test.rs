//! Integration tests for the HTTP surface.
//!
//! These drive the routers in-process with `oneshot`; no socket or database
//! is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower::ServiceExt;

use senha_api::api::extractors::JsonBody;
use senha_api::{create_router, create_router_with, AppError, AppResult, DefaultController, Service};

// =============================================================================
// Test Helpers
// =============================================================================

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[derive(Serialize)]
struct PasswordPolicy {
    length: u8,
    symbols: bool,
}

/// Service that always succeeds
struct PolicyService;

#[async_trait]
impl Service for PolicyService {
    type Output = PasswordPolicy;

    async fn run(&self) -> AppResult<PasswordPolicy> {
        Ok(PasswordPolicy {
            length: 16,
            symbols: true,
        })
    }
}

/// Service that always fails with the given error
struct FailingService {
    status: Option<StatusCode>,
}

#[async_trait]
impl Service for FailingService {
    type Output = ();

    async fn run(&self) -> AppResult<()> {
        match self.status {
            Some(status) => Err(AppError::with_status(status, "not found")),
            None => Err(AppError::internal("entropy source unavailable")),
        }
    }
}

// =============================================================================
// Root Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_returns_exact_welcome_payload() {
    let response = create_router().oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(
        body_bytes(response).await,
        r#"{"success":true,"message":"API de geração de senhas!"}"#.as_bytes()
    );
}

#[tokio::test]
async fn test_root_is_stable_across_requests() {
    let app = create_router();

    for _ in 0..3 {
        let response = app.clone().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_unknown_path_is_default_404() {
    let response = create_router()
        .oneshot(get_request("/passwords"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_method_on_root_is_405() {
    let response = create_router()
        .oneshot(Request::post("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Controller Tests
// =============================================================================

#[tokio::test]
async fn test_controller_route_returns_data_envelope() {
    let app = DefaultController::new(Arc::new(PolicyService)).routes();

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "data": { "length": 16, "symbols": true } })
    );
}

#[tokio::test]
async fn test_controller_failure_uses_declared_status() {
    let service = FailingService {
        status: Some(StatusCode::NOT_FOUND),
    };
    let app = DefaultController::new(Arc::new(service)).routes();

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "error": "not found" })
    );
}

#[tokio::test]
async fn test_controller_failure_without_status_is_500() {
    let app = DefaultController::new(Arc::new(FailingService { status: None })).routes();

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "error": "entropy source unavailable" })
    );
}

#[tokio::test]
async fn test_controller_can_be_nested() {
    let app = Router::new().nest(
        "/policy",
        DefaultController::new(Arc::new(PolicyService)).routes(),
    );

    let response = app.oneshot(get_request("/policy")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_controller_mounts_next_to_welcome_route() {
    let app = create_router_with(Router::new().nest(
        "/policy",
        DefaultController::new(Arc::new(PolicyService)).routes(),
    ));

    let response = app.clone().oneshot(get_request("/policy")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(
        body_bytes(response).await,
        r#"{"success":true,"message":"API de geração de senhas!"}"#.as_bytes()
    );
}

// =============================================================================
// Error Boundary Tests
// =============================================================================

async fn explode() -> &'static str {
    panic!("index out of range in generator")
}

#[tokio::test]
async fn test_panicking_handler_yields_500_envelope() {
    let app = create_router_with(Router::new().route("/explode", get(explode)));

    let response = app.oneshot(get_request("/explode")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "error": "Internal server error" })
    );
}

async fn echo(JsonBody(payload): JsonBody<Value>) -> Json<Value> {
    Json(payload)
}

fn json_request(body: &'static str) -> Request<Body> {
    Request::post("/echo")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_json_body_is_parsed() {
    let app = Router::new().route("/echo", post(echo));

    let response = app.oneshot(json_request(r#"{"length":12}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "length": 12 }));
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let app = Router::new().route("/echo", post(echo));

    let response = app.oneshot(json_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_415() {
    let app = Router::new().route("/echo", post(echo));

    let response = app
        .oneshot(Request::post("/echo").body(Body::from("{}")).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body_json(response).await["success"], json!(false));
}
