//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError`. Constraint failures keep the
//! server's message so it can be passed through to the client.

use partstore_core::storage::RepositoryError;
use sqlx::error::ErrorKind;

/// SQLSTATE codes for values PostgreSQL refused to coerce.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Unique, not-null, check and foreign key violations → `RepositoryError::ConstraintViolation`
/// - Invalid text representation / out of range → `RepositoryError::InvalidData`
/// - Pool, I/O and TLS failures → `RepositoryError::ConnectionFailed`
/// - All other errors, including stored rows that fail to decode → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation => {
                RepositoryError::ConstraintViolation(db_err.message().to_string())
            }
            _ => match db_err.code().as_deref() {
                Some(INVALID_TEXT_REPRESENTATION) | Some(NUMERIC_VALUE_OUT_OF_RANGE) => {
                    RepositoryError::InvalidData(db_err.message().to_string())
                }
                _ => RepositoryError::QueryFailed(err.to_string()),
            },
        },
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::ConnectionFailed(err.to_string()),
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
