//! Bearer token handling at the HTTP boundary.

use http::StatusCode;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use crate::helpers::{self, TEST_ISSUER, TestApp};

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::offline();

    let response = app.request("GET", "/api/folders", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::offline();

    let response = app
        .request("GET", "/api/sets", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = TestApp::offline();
    let claims = serde_json::json!({
        "sub": "intruder",
        "token_use": "access",
        "iss": TEST_ISSUER,
        "exp": chrono::Utc::now().timestamp() + 3600,
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = app
        .request("GET", "/api/flashcards", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::offline();
    let claims = serde_json::json!({
        "sub": "sleepy",
        "token_use": "access",
        "iss": TEST_ISSUER,
        "exp": chrono::Utc::now().timestamp() - 3600,
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(helpers::TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app
        .request("GET", "/api/summaries", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_same_subject_sees_same_data() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let subject = format!("returning-{}", uuid::Uuid::new_v4());

    let first = helpers::token_for(&subject);
    let created = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "Chemistry" })),
            Some(&first),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let second = helpers::token_for(&subject);
    let listed = app.request("GET", "/api/folders", None, Some(&second)).await;

    assert_eq!(listed.status, StatusCode::OK);
    let folders = listed.body.as_array().unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["owner_id"], created.body["owner_id"]);
}
