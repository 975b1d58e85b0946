//! Storage backend implementations.
//!
//! This module provides concrete implementations of [`PartRepository`]
//! defined in `partstore_core::storage`. Backends are compiled in via feature
//! flags and chosen at startup from [`Config::storage_backend`].
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `postgres`: PostgreSQL storage backend using `sqlx`
//!
//! The in-memory backend is always available.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p partstore
//! ```
//!
//! Build with both SQLite and PostgreSQL:
//! ```bash
//! cargo build -p partstore --features postgres
//! ```
//!
//! [`PartRepository`]: partstore_core::storage::PartRepository
//! [`Config::storage_backend`]: crate::config::Config::storage_backend

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(test)]
pub(crate) mod conformance;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;
