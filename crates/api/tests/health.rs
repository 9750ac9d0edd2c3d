//! Health endpoint smoke test.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, expect_json, get};

#[tokio::test]
async fn test_health_returns_ok() {
    let app = build_test_app();
    let response = get(app, "/health").await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["status"], "ok");
}
