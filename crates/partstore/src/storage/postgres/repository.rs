//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use partstore_core::part::{Part, PartInput};
use partstore_core::storage::{PartRepository, Result};

use super::error::map_sqlx_error;
use super::schema;

type PartRow = (i64, String, i64, i64, String);

fn row_to_part((id, part_number, extended_length, stroke, force): PartRow) -> Part {
    Part {
        id,
        part_number,
        extended_length,
        stroke,
        force,
    }
}

/// PostgreSQL-based repository implementation.
///
/// The pool is shared by all handlers; `sqlx` hands each statement its own
/// connection, so no locking happens here.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects a pool to the given database URL.
    ///
    /// Fails with `ConnectionFailed` if the server cannot be reached.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;

        tracing::info!(max_connections, "PostgreSQL connection pool initialized");

        Ok(Self { pool })
    }
}

#[async_trait]
impl PartRepository for PostgresRepository {
    async fn initialize(&self) -> Result<()> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        sqlx::query(schema::CREATE_PART_NUMBER_INDEX)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn seed(&self, parts: &[PartInput]) -> Result<u64> {
        let mut inserted = 0;
        for part in parts {
            let result = sqlx::query(schema::INSERT_PART_IF_ABSENT)
                .bind(&part.part_number)
                .bind(part.extended_length)
                .bind(part.stroke)
                .bind(&part.force)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    async fn list_parts(&self) -> Result<Vec<Part>> {
        let rows = sqlx::query_as::<_, PartRow>(schema::SELECT_PARTS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_part).collect())
    }

    async fn get_part(&self, id: i64) -> Result<Option<Part>> {
        let row = sqlx::query_as::<_, PartRow>(schema::SELECT_PART_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(row_to_part))
    }

    async fn create_part(&self, input: &PartInput) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(schema::INSERT_PART)
            .bind(&input.part_number)
            .bind(input.extended_length)
            .bind(input.stroke)
            .bind(&input.force)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn update_part(&self, id: i64, input: &PartInput) -> Result<u64> {
        let result = sqlx::query(schema::UPDATE_PART)
            .bind(id)
            .bind(&input.part_number)
            .bind(input.extended_length)
            .bind(input.stroke)
            .bind(&input.force)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_part(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(schema::DELETE_PART)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
