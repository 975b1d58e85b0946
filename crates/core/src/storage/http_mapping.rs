//! Status codes for storage failures.
//!
//! Kept free of any HTTP crate so the server decides how to build responses.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Client-caused failures (unknown id, duplicate part number, a value the
/// store refuses on write) are 4xx. Backend failures are 500.
///
/// ```
/// use partstore_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::part_not_found(12);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConstraintViolation(_) | RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) | RepositoryError::QueryFailed(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        let cases = [
            (RepositoryError::part_not_found(123), 404),
            (
                RepositoryError::ConstraintViolation("UNIQUE constraint failed".to_string()),
                400,
            ),
            (RepositoryError::InvalidData("bad column type".to_string()), 400),
        ];

        for (error, expected) in cases {
            assert_eq!(repository_error_to_status_code(&error), expected, "{error}");
        }
    }

    #[test]
    fn test_backend_errors_are_500() {
        let connection = RepositoryError::ConnectionFailed("connection refused".to_string());
        let query = RepositoryError::QueryFailed("disk I/O error".to_string());

        assert_eq!(repository_error_to_status_code(&connection), 500);
        assert_eq!(repository_error_to_status_code(&query), 500);
    }
}
