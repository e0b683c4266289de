//! Identity resolution against a real database.
//!
//! Runs only when `NOTECRUNCH_TEST_DATABASE_URL` points at a Postgres
//! instance; otherwise each test returns early.

use notecrunch_auth::IdentityResolver;
use notecrunch_core::config::DatabaseConfig;
use notecrunch_core::error::ErrorKind;
use notecrunch_database::DatabasePool;
use notecrunch_database::migration::run_migrations;

async fn resolver() -> Option<IdentityResolver> {
    let url = std::env::var("NOTECRUNCH_TEST_DATABASE_URL").ok()?;
    let pool = DatabasePool::connect(&DatabaseConfig::with_url(url))
        .await
        .expect("connect to test database");
    run_migrations(pool.pool()).await.expect("run migrations");
    Some(IdentityResolver::new(pool))
}

fn unique_subject() -> String {
    format!("sub-{}", uuid::Uuid::new_v4())
}

#[tokio::test]
async fn test_same_subject_resolves_to_same_owner() {
    let Some(resolver) = resolver().await else {
        return;
    };
    let sub = unique_subject();

    let first = resolver.resolve(&sub, Some("a@example.com")).await.unwrap();
    let second = resolver.resolve(&sub, None).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.sub, sub);
}

#[tokio::test]
async fn test_blank_email_never_clears_stored_email() {
    let Some(resolver) = resolver().await else {
        return;
    };
    let sub = unique_subject();

    resolver.resolve(&sub, Some("keep@example.com")).await.unwrap();
    let user = resolver.resolve(&sub, Some("   ")).await.unwrap();
    assert_eq!(user.email.as_deref(), Some("keep@example.com"));

    let user = resolver.resolve(&sub, None).await.unwrap();
    assert_eq!(user.email.as_deref(), Some("keep@example.com"));
}

#[tokio::test]
async fn test_newer_email_replaces_stored_email() {
    let Some(resolver) = resolver().await else {
        return;
    };
    let sub = unique_subject();

    resolver.resolve(&sub, Some("old@example.com")).await.unwrap();
    let user = resolver.resolve(&sub, Some("new@example.com")).await.unwrap();
    assert_eq!(user.email.as_deref(), Some("new@example.com"));
}

#[tokio::test]
async fn test_blank_subject_is_rejected() {
    let Some(resolver) = resolver().await else {
        return;
    };
    let err = resolver.resolve("  ", Some("x@example.com")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}
