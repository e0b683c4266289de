//! Flashcard endpoints and generation.

use http::StatusCode;
use serde_json::json;

use notecrunch_core::error::AppError;
use notecrunch_core::types::GeneratedFlashcard;

use crate::helpers::{TestApp, new_user_token};

async fn create_set(app: &TestApp, token: &str, name: &str) -> String {
    app.request("POST", "/api/sets", Some(json!({ "name": name })), Some(token))
        .await
        .id()
}

#[tokio::test]
async fn test_created_card_is_listed_in_its_set() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    let set_id = create_set(&app, &token, "Capitals").await;

    let card = app
        .request(
            "POST",
            "/api/flashcards",
            Some(json!({ "question": "Q1", "answer": "A1", "set_id": set_id })),
            Some(&token),
        )
        .await;
    assert_eq!(card.status, StatusCode::CREATED);

    let listed = app
        .request("GET", &format!("/api/sets/{set_id}/flashcards"), None, Some(&token))
        .await;
    let cards = listed.body.as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["question"], "Q1");
    assert_eq!(cards[0]["answer"], "A1");
}

#[tokio::test]
async fn test_partial_update_keeps_question() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    let set_id = create_set(&app, &token, "Elements").await;

    let card = app
        .request(
            "POST",
            "/api/flashcards",
            Some(json!({ "question": "Symbol for gold?", "answer": "Ag", "set_id": set_id })),
            Some(&token),
        )
        .await;

    let updated = app
        .request(
            "PUT",
            &format!("/api/flashcards/{}", card.id()),
            Some(json!({ "answer": "Au" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["question"], "Symbol for gold?");
    assert_eq!(updated.body["answer"], "Au");
    assert_ne!(updated.body["updated_at"], card.body["updated_at"]);
}

#[tokio::test]
async fn test_create_requires_owned_set() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let alice = new_user_token();
    let bob = new_user_token();
    let bobs_set = create_set(&app, &bob, "Private").await;

    let response = app
        .request(
            "POST",
            "/api/flashcards",
            Some(json!({ "question": "Q", "answer": "A", "set_id": bobs_set })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let missing_set = app
        .request(
            "POST",
            "/api/flashcards",
            Some(json!({ "question": "Q", "answer": "A" })),
            Some(&alice),
        )
        .await;
    assert_eq!(missing_set.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_returns_no_content() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    let set_id = create_set(&app, &token, "Temp").await;
    let card = app
        .request(
            "POST",
            "/api/flashcards",
            Some(json!({ "question": "Q", "answer": "A", "set_id": set_id })),
            Some(&token),
        )
        .await;
    let path = format!("/api/flashcards/{}", card.id());

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generate_returns_cards_without_storing() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    app.gateway.respond_with_cards(Ok(vec![GeneratedFlashcard {
        question: "What is ATP?".into(),
        answer: "The cell's energy currency".into(),
    }]));

    let response = app
        .request(
            "POST",
            "/api/flashcards/generate",
            Some(json!({ "text": "ATP stores energy." })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["flashcards"][0]["question"], "What is ATP?");

    let stored = app.request("GET", "/api/flashcards", None, Some(&token)).await;
    assert!(stored.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_generation_is_bad_gateway() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let token = new_user_token();
    app.gateway
        .respond_with_cards(Err(AppError::bad_generation("expected a JSON array")));

    let response = app
        .request(
            "POST",
            "/api/flashcards/generate",
            Some(json!({ "text": "notes" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.error_code(), "BAD_GENERATION");
}
