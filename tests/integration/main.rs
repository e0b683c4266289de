//! HTTP-level integration tests for the NoteCrunch API.
//!
//! Tests that need PostgreSQL read `NOTECRUNCH_TEST_DATABASE_URL` and return
//! early when it is unset.

mod helpers;

mod auth_test;
mod flashcard_test;
mod folder_test;
mod health_test;
mod set_test;
mod summary_test;
