//! Folder endpoints.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, new_user_token};

#[tokio::test]
async fn test_create_and_list_folders() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();

    let created = app
        .request("POST", "/api/folders", Some(json!({ "name": "Bio" })), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["name"], "Bio");

    let listed = app.request("GET", "/api/folders", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_folder_name_conflicts() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();

    let first = app
        .request("POST", "/api/folders", Some(json!({ "name": "Bio" })), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/folders", Some(json!({ "name": "  Bio " })), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.error_code(), "CONFLICT");

    let listed = app.request("GET", "/api/folders", None, Some(&token)).await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_and_malformed_bodies_are_validation_errors() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();

    let blank = app
        .request("POST", "/api/folders", Some(json!({ "name": "   " })), Some(&token))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.error_code(), "VALIDATION_ERROR");

    let missing = app
        .request("POST", "/api/folders", Some(json!({})), Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.error_code(), "VALIDATION_ERROR");

    let bad_id = app
        .request("DELETE", "/api/folders/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_folder_unassigns_its_sets() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();

    let folder = app
        .request("POST", "/api/folders", Some(json!({ "name": "Physics" })), Some(&token))
        .await;
    let folder_id = folder.id();

    for name in ["Kinematics", "Optics"] {
        let set = app
            .request(
                "POST",
                "/api/sets",
                Some(json!({ "name": name, "folder_id": folder_id })),
                Some(&token),
            )
            .await;
        assert_eq!(set.status, StatusCode::CREATED);
    }

    let deleted = app
        .request("DELETE", &format!("/api/folders/{folder_id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["name"], "Physics");

    let folders = app.request("GET", "/api/folders", None, Some(&token)).await;
    assert!(folders.body.as_array().unwrap().is_empty());

    let unassigned = app
        .request("GET", "/api/sets/unassigned", None, Some(&token))
        .await;
    assert_eq!(unassigned.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_other_users_folder_is_not_found() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let alice = new_user_token();
    let bob = new_user_token();

    let folder = app
        .request("POST", "/api/folders", Some(json!({ "name": "Bio" })), Some(&alice))
        .await;
    let folder_id = folder.id();

    let bob_list = app.request("GET", "/api/folders", None, Some(&bob)).await;
    assert!(bob_list.body.as_array().unwrap().is_empty());

    let bob_delete = app
        .request("DELETE", &format!("/api/folders/{folder_id}"), None, Some(&bob))
        .await;
    assert_eq!(bob_delete.status, StatusCode::NOT_FOUND);
    assert_eq!(bob_delete.error_code(), "NOT_FOUND");

    let bob_sets = app
        .request("GET", &format!("/api/folders/{folder_id}/sets"), None, Some(&bob))
        .await;
    assert_eq!(bob_sets.status, StatusCode::NOT_FOUND);

    let alice_list = app.request("GET", "/api/folders", None, Some(&alice)).await;
    assert_eq!(alice_list.body.as_array().unwrap().len(), 1);
}
