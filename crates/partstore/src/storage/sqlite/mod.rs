//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of [`PartRepository`]
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. The same repository serves both the file-backed and the
//! in-memory SQLite backends.
//!
//! [`PartRepository`]: partstore_core::storage::PartRepository

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
