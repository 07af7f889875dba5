//! Business-rule failures raised by the course service.

use crate::domain::repositories::RepositoryError;

/// Domain error for course operations.
///
/// Converted 1:1 into an HTTP response by [`crate::error::AppError`].
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("Course with title {title} already exists")]
    DuplicateTitle { title: String },

    #[error("Course with ID {id} not found")]
    NotFound { id: String },

    /// The course was found but the store removed nothing. Reported as not found.
    #[error("Failed to delete course with ID {id}")]
    DeleteFailed { id: String },

    #[error("Failed to update course with ID {id}")]
    UpdateFailed { id: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
