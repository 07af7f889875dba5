//! In-process implementation of the course repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::{CourseRepository, RepositoryError};

/// Name reported for title collisions, matching the PostgreSQL constraint.
const TITLE_CONSTRAINT: &str = "courses_title_key";

/// Course store kept in memory.
///
/// Records live in insertion order. Title uniqueness is checked under the
/// write lock, so concurrent creates cannot both win. Nothing survives a
/// restart; selected with `STORAGE_BACKEND=memory` and used by the HTTP tests.
#[derive(Default)]
pub struct MemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
}

impl MemoryCourseRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn title_violation() -> RepositoryError {
        RepositoryError::UniqueViolation {
            constraint: TITLE_CONSTRAINT.to_string(),
        }
    }
}

#[async_trait]
impl CourseRepository for MemoryCourseRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError> {
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Course>, RepositoryError> {
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|c| c.title == title).cloned())
    }

    async fn list(&self) -> Result<Vec<Course>, RepositoryError> {
        Ok(self.courses.read().await.clone())
    }

    async fn insert(&self, new_course: NewCourse) -> Result<Course, RepositoryError> {
        let mut courses = self.courses.write().await;

        if courses.iter().any(|c| c.title == new_course.title) {
            return Err(Self::title_violation());
        }

        let course = Course::new(
            Uuid::new_v4(),
            new_course.title,
            new_course.description,
            new_course.level,
        );
        courses.push(course.clone());

        Ok(course)
    }

    async fn apply_update(
        &self,
        id: Uuid,
        patch: CoursePatch,
    ) -> Result<Option<Course>, RepositoryError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut courses = self.courses.write().await;

        if let Some(title) = &patch.title
            && courses.iter().any(|c| c.id != id && &c.title == title)
        {
            return Err(Self::title_violation());
        }

        let Some(slot) = courses.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        *slot = slot.merged(&patch);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, course: &Course) -> Result<bool, RepositoryError> {
        let mut courses = self.courses.write().await;
        let before = courses.len();
        courses.retain(|c| c.id != course.id);

        Ok(courses.len() < before)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
