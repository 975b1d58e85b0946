//! PostgreSQL storage backend implementation.
//!
//! Implements [`PartRepository`] on a `sqlx` connection pool. Enabled with
//! the `postgres` Cargo feature.
//!
//! [`PartRepository`]: partstore_core::storage::PartRepository

mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
