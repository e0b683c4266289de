//! Summary and transcription endpoints.

use axum::body::Body;
use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, new_user_token};

const BOUNDARY: &str = "notecrunch-test-boundary";

fn multipart_body(file_name: &str, data: &[u8], title: Option<&str>) -> Body {
    let mut body = Vec::new();
    if let Some(title) = title {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n{title}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: audio/mpeg\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    Body::from(body)
}

#[tokio::test]
async fn test_summarize_url_stores_summary() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    let url = "https://www.youtube.com/watch?v=abc123";

    let created = app
        .request("POST", "/api/summaries", Some(json!({ "url": url })), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["title"], url);
    assert_eq!(created.body["source"], "url");
    assert_eq!(created.body["summary"], "- Light becomes sugar");

    let fetched = app
        .request("GET", &format!("/api/summaries/{}", created.id()), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["id"], created.body["id"]);

    let other = new_user_token();
    let hidden = app
        .request("GET", &format!("/api/summaries/{}", created.id()), None, Some(&other))
        .await;
    assert_eq!(hidden.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_uses_file_name_as_title() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();

    let created = app
        .send(
            "POST",
            "/api/summaries/upload",
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            multipart_body("lecture.mp3", b"ID3 fake audio", None),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["title"], "lecture.mp3");
    assert_eq!(created.body["source"], "upload");
    assert!(app.gateway.calls().contains(&"transcribe:upload".to_string()));

    let titled = app
        .send(
            "POST",
            "/api/summaries/upload",
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            multipart_body("week2.mp3", b"more audio", Some("Week 2")),
            Some(&token),
        )
        .await;
    assert_eq!(titled.status, StatusCode::CREATED);
    assert_eq!(titled.body["title"], "Week 2");

    let listed = app.request("GET", "/api/summaries", None, Some(&token)).await;
    assert_eq!(listed.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_transcribe_returns_text() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();

    let response = app
        .request(
            "POST",
            "/api/transcribe",
            Some(json!({ "url": "https://youtu.be/xyz" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["text"],
        "photosynthesis converts light into chemical energy"
    );

    let invalid = app
        .request(
            "POST",
            "/api/transcribe",
            Some(json!({ "url": "youtube" })),
            Some(&token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.error_code(), "VALIDATION_ERROR");
}
