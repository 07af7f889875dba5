//! Repository trait for course data access.

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use async_trait::async_trait;
use uuid::Uuid;

/// Failure reported by a course store.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// The backend could not serve the request (unreachable, corrupt row, ...).
    #[error("storage backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn backend(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(source.into())
    }
}

/// Repository interface for managing courses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryCourseRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_course.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Finds a course by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError>;

    /// Finds a course by exact (case-sensitive) title.
    async fn find_by_title(&self, title: &str) -> Result<Option<Course>, RepositoryError>;

    /// Lists every stored course in insertion order.
    async fn list(&self) -> Result<Vec<Course>, RepositoryError>;

    /// Stores a new course and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UniqueViolation`] if the title is already taken.
    async fn insert(&self, new_course: NewCourse) -> Result<Course, RepositoryError>;

    /// Merges `patch` onto the course with `id` and persists the result.
    ///
    /// Returns `Ok(None)` if no course has that id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UniqueViolation`] if the new title is already taken.
    async fn apply_update(
        &self,
        id: Uuid,
        patch: CoursePatch,
    ) -> Result<Option<Course>, RepositoryError>;

    /// Removes a course.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if nothing matched.
    async fn delete(&self, course: &Course) -> Result<bool, RepositoryError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
