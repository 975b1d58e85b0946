//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage backend is built once at startup and shared
//! as a trait object, so handlers never know which store they talk to.

use std::sync::Arc;

use anyhow::Context;

use partstore_core::part::sample_parts;
use partstore_core::storage::PartRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each request handler. The repository is the only
/// handle to persisted state.
#[derive(Clone)]
pub struct AppState {
    /// Part repository for the configured backend.
    pub part_repo: Arc<dyn PartRepository>,
}

impl AppState {
    /// Wraps an already initialized repository.
    pub fn from_repository(part_repo: Arc<dyn PartRepository>) -> Self {
        Self { part_repo }
    }

    /// Connects the configured backend, creates the schema and optionally
    /// seeds the sample parts.
    ///
    /// Any failure here is fatal: the server must not start without a store.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let part_repo = connect(config).await?;

        part_repo
            .initialize()
            .await
            .context("failed to initialize parts table")?;

        if config.seed_sample_data {
            let inserted = part_repo
                .seed(&sample_parts())
                .await
                .context("failed to seed sample parts")?;
            tracing::info!(inserted, "Seeded sample parts");
        }

        tracing::info!(backend = %config.storage_backend, "Storage ready");

        Ok(Self::from_repository(part_repo))
    }
}

impl Default for AppState {
    /// Empty in-memory store. Used by tests.
    fn default() -> Self {
        Self::from_repository(Arc::new(InMemoryRepository::new()))
    }
}

/// Opens the storage backend selected in the configuration.
async fn connect(config: &Config) -> anyhow::Result<Arc<dyn PartRepository>> {
    let backend = config.storage_backend;

    let repo: Arc<dyn PartRepository> = match backend {
        StorageBackend::Memory => Arc::new(InMemoryRepository::new()),

        #[cfg(feature = "sqlite")]
        StorageBackend::Sqlite => Arc::new(
            crate::storage::SqliteRepository::new(&config.sqlite_path)
                .await
                .with_context(|| format!("failed to open SQLite database {}", config.sqlite_path))?,
        ),

        #[cfg(feature = "sqlite")]
        StorageBackend::SqliteMemory => Arc::new(
            crate::storage::SqliteRepository::new_in_memory()
                .await
                .context("failed to open in-memory SQLite database")?,
        ),

        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => Arc::new(
            crate::storage::PostgresRepository::new(
                &config.database_url,
                config.database_max_connections,
            )
            .await
            .context("failed to connect to PostgreSQL")?,
        ),

        #[allow(unreachable_patterns)]
        other => anyhow::bail!(
            "storage backend '{other}' is not compiled in; rebuild with --features {}",
            other.cargo_feature().unwrap_or("default")
        ),
    };

    Ok(repo)
}
