//! Set endpoints, including three-state folder reassignment.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, TestResponse, new_user_token};

async fn create_folder(app: &TestApp, token: &str, name: &str) -> String {
    app.request("POST", "/api/folders", Some(json!({ "name": name })), Some(token))
        .await
        .id()
}

async fn create_set(app: &TestApp, token: &str, body: serde_json::Value) -> TestResponse {
    app.request("POST", "/api/sets", Some(body), Some(token)).await
}

#[tokio::test]
async fn test_folder_reference_three_states() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    let bio = create_folder(&app, &token, "Bio").await;
    let chem = create_folder(&app, &token, "Chem").await;

    let set = create_set(&app, &token, json!({ "name": "Cells", "folder_id": bio })).await;
    assert_eq!(set.status, StatusCode::CREATED);
    let path = format!("/api/sets/{}", set.id());

    // omitted: unchanged
    let renamed = app
        .request("PUT", &path, Some(json!({ "name": "Cell Biology" })), Some(&token))
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["name"], "Cell Biology");
    assert_eq!(renamed.body["folder_id"], bio.as_str());

    // id: moved
    let moved = app
        .request("PATCH", &path, Some(json!({ "folder_id": chem })), Some(&token))
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.body["folder_id"], chem.as_str());
    assert_eq!(moved.body["name"], "Cell Biology");

    // null: cleared
    let cleared = app
        .request("PUT", &path, Some(json!({ "folder_id": null })), Some(&token))
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert!(cleared.body["folder_id"].is_null());
}

#[tokio::test]
async fn test_foreign_folder_is_not_found_and_changes_nothing() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let alice = new_user_token();
    let bob = new_user_token();
    let bobs_folder = create_folder(&app, &bob, "Secret").await;

    let rejected = create_set(
        &app,
        &alice,
        json!({ "name": "Stolen", "folder_id": bobs_folder }),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::NOT_FOUND);

    let sets = app.request("GET", "/api/sets", None, Some(&alice)).await;
    assert!(sets.body.as_array().unwrap().is_empty());

    let set = create_set(&app, &alice, json!({ "name": "Mine" })).await;
    let path = format!("/api/sets/{}", set.id());
    let moved = app
        .request("PUT", &path, Some(json!({ "folder_id": bobs_folder })), Some(&alice))
        .await;
    assert_eq!(moved.status, StatusCode::NOT_FOUND);

    let unassigned = app
        .request("GET", "/api/sets/unassigned", None, Some(&alice))
        .await;
    assert_eq!(unassigned.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_filters_and_paginates() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    let folder = create_folder(&app, &token, "Languages").await;

    create_set(&app, &token, json!({ "name": "French", "folder_id": folder })).await;
    create_set(&app, &token, json!({ "name": "German", "folder_id": folder })).await;
    create_set(&app, &token, json!({ "name": "Loose" })).await;

    let filtered = app
        .request("GET", &format!("/api/sets?folder_id={folder}"), None, Some(&token))
        .await;
    assert_eq!(filtered.status, StatusCode::OK);
    assert_eq!(filtered.body.as_array().unwrap().len(), 2);

    let page = app
        .request("GET", "/api/sets?limit=1&offset=1", None, Some(&token))
        .await;
    assert_eq!(page.body.as_array().unwrap().len(), 1);

    let negative = app
        .request("GET", "/api/sets?limit=-1", None, Some(&token))
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
    assert_eq!(negative.error_code(), "VALIDATION_ERROR");

    let garbage = app
        .request("GET", "/api/sets?offset=abc", None, Some(&token))
        .await;
    assert_eq!(garbage.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_assign_and_unassign_by_folder() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    let folder = create_folder(&app, &token, "History").await;
    let set = create_set(&app, &token, json!({ "name": "Rome" })).await;

    let assigned = app
        .request(
            "PUT",
            &format!("/api/sets/{}/folder", set.id()),
            Some(json!({ "folder_id": folder })),
            Some(&token),
        )
        .await;
    assert_eq!(assigned.status, StatusCode::OK);
    assert_eq!(assigned.body["folder_id"], folder.as_str());

    let in_folder = app
        .request("GET", &format!("/api/folders/{folder}/sets"), None, Some(&token))
        .await;
    assert_eq!(in_folder.body.as_array().unwrap().len(), 1);

    let path = format!("/api/sets/unassign-by-folder/{folder}");
    let first = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body.as_array().unwrap().len(), 1);
    assert!(first.body[0]["folder_id"].is_null());

    let second = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert!(second.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_set_cascades_flashcards() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    let set = create_set(&app, &token, json!({ "name": "Vocab" })).await;
    let set_id = set.id();

    for (q, a) in [("hola", "hello"), ("adios", "goodbye")] {
        let card = app
            .request(
                "POST",
                "/api/flashcards",
                Some(json!({ "question": q, "answer": a, "set_id": set_id })),
                Some(&token),
            )
            .await;
        assert_eq!(card.status, StatusCode::CREATED);
    }

    let deleted = app
        .request("DELETE", &format!("/api/sets/{set_id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["name"], "Vocab");

    let cards = app.request("GET", "/api/flashcards", None, Some(&token)).await;
    assert!(cards.body.as_array().unwrap().is_empty());

    let gone = app
        .request("GET", &format!("/api/sets/{set_id}/flashcards"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
