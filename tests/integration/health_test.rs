//! Public health endpoints.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::offline();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "OK");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_database_health_reports_unreachable_database() {
    let app = TestApp::offline();

    let response = app.request("GET", "/api/health/db", None, None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["ok"], false);
}

#[tokio::test]
async fn test_database_health_ok() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };

    let response = app.request("GET", "/api/health/db", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
}
