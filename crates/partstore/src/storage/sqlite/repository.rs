//! SQLite repository implementation.
//!
//! Implements [`PartRepository`] from `partstore_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use partstore_core::part::{Part, PartInput};
use partstore_core::storage::{PartRepository, RepositoryError, Result};

use super::conversions::row_to_part;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// The connection runs on a dedicated background thread owned by
/// `tokio-rusqlite`; every call is queued to it, so access is serialized
/// without any locking here.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database.
    ///
    /// The database file will be created if it doesn't exist. Call
    /// [`PartRepository::initialize`] before use.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        tracing::debug!("Opened in-memory SQLite database");

        Ok(Self { conn })
    }
}

fn input_params(input: &PartInput) -> (String, i64, i64, String) {
    (
        input.part_number.clone(),
        input.extended_length,
        input.stroke,
        input.force.clone(),
    )
}

#[async_trait]
impl PartRepository for SqliteRepository {
    async fn initialize(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn seed(&self, parts: &[PartInput]) -> Result<u64> {
        let parts: Vec<_> = parts.iter().map(input_params).collect();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::INSERT_PART_IF_ABSENT)
                    .map_err(wrap_err)?;

                let mut inserted = 0u64;
                for (part_number, extended_length, stroke, force) in parts {
                    let rows = stmt
                        .execute(rusqlite::params![part_number, extended_length, stroke, force])
                        .map_err(wrap_err)?;
                    inserted += rows as u64;
                }
                Ok(inserted)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_parts(&self) -> Result<Vec<Part>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_PARTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_part).map_err(wrap_err)?;

                let mut parts = Vec::new();
                for row_result in rows {
                    parts.push(row_result.map_err(wrap_err)?);
                }
                Ok(parts)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_part(&self, id: i64) -> Result<Option<Part>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_PART_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_part) {
                    Ok(part) => Ok(Some(part)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_part(&self, input: &PartInput) -> Result<i64> {
        let (part_number, extended_length, stroke, force) = input_params(input);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PART,
                    rusqlite::params![part_number, extended_length, stroke, force],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_part(&self, id: i64, input: &PartInput) -> Result<u64> {
        let (part_number, extended_length, stroke, force) = input_params(input);

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PART,
                        rusqlite::params![id, part_number, extended_length, stroke, force],
                    )
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_part(&self, id: i64) -> Result<u64> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_PART, [id]).map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
