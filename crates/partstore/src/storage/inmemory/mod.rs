//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`PartRepository`]
//! that keeps all parts in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. It is
//! used by tests and for throwaway demo instances where persistence is not
//! required.
//!
//! [`PartRepository`]: partstore_core::storage::PartRepository
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.initialize().await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
