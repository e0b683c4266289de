//! # notecrunch-database
//!
//! PostgreSQL connection management, embedded migrations and the
//! repositories for every NoteCrunch table.
//!
//! Repositories are stateless and take a `&mut PgConnection`, so callers
//! decide whether a statement runs on a pooled connection or inside a
//! transaction.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
