//! Translation of SQLx errors into repository errors.

use crate::domain::repositories::RepositoryError;

/// Maps a SQLx error to a [`RepositoryError`].
///
/// Unique violations keep the constraint name so callers can tell which
/// invariant was hit; everything else is a backend failure.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = e.as_database_error()
        && db_err.is_unique_violation()
    {
        return RepositoryError::UniqueViolation {
            constraint: db_err.constraint().unwrap_or("unknown").to_string(),
        };
    }

    RepositoryError::backend(e)
}
