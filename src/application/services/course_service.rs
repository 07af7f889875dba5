//! Course management service.

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::errors::CourseError;
use crate::domain::repositories::{CourseRepository, RepositoryError};
use std::sync::Arc;
use uuid::Uuid;

/// Confirmation returned after a course is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// Service enforcing the course business rules on top of a [`CourseRepository`].
///
/// - Titles are unique: create rejects a title that is already stored
/// - Read, update and delete fail with [`CourseError::NotFound`] for unknown ids
pub struct CourseService<R: CourseRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CourseRepository + ?Sized> CourseService<R> {
    /// Creates a new course service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a course if no other course has the same title.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::DuplicateTitle`] if the title is taken, including
    /// when a concurrent create wins the race and the store rejects the insert.
    /// Returns [`CourseError::Repository`] on storage errors.
    pub async fn create(&self, new_course: NewCourse) -> Result<Course, CourseError> {
        if self
            .repository
            .find_by_title(&new_course.title)
            .await?
            .is_some()
        {
            tracing::debug!(title = %new_course.title, "Rejected duplicate course title");
            return Err(CourseError::DuplicateTitle {
                title: new_course.title,
            });
        }

        let title = new_course.title.clone();
        let course = self
            .repository
            .insert(new_course)
            .await
            .map_err(|e| duplicate_title_or(e, &title))?;

        tracing::info!(course_id = %course.id, title = %course.title, "Course created");
        Ok(course)
    }

    /// Lists all courses.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::Repository`] on storage errors.
    pub async fn find_all(&self) -> Result<Vec<Course>, CourseError> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves a course by id.
    ///
    /// An id that is not a valid UUID cannot match a stored course and is
    /// reported as not found without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::NotFound`] if no course has this id.
    /// Returns [`CourseError::Repository`] on storage errors.
    pub async fn find_one(&self, id: &str) -> Result<Course, CourseError> {
        let uuid = parse_id(id)?;

        self.repository
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Applies a partial update to a course.
    ///
    /// Fields absent from `patch` keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::NotFound`] if no course has this id.
    /// Returns [`CourseError::DuplicateTitle`] if the new title belongs to another course.
    /// Returns [`CourseError::UpdateFailed`] if the store hands back a different record.
    /// Returns [`CourseError::Repository`] on storage errors.
    pub async fn update(&self, id: &str, patch: CoursePatch) -> Result<Course, CourseError> {
        let uuid = parse_id(id)?;
        let new_title = patch.title.clone();

        let updated = self
            .repository
            .apply_update(uuid, patch)
            .await
            .map_err(|e| match &new_title {
                Some(title) => duplicate_title_or(e, title),
                None => CourseError::Repository(e),
            })?
            .ok_or_else(|| not_found(id))?;

        if updated.id != uuid {
            tracing::error!(
                course_id = %uuid,
                returned_id = %updated.id,
                "Store returned a different course after update"
            );
            return Err(CourseError::UpdateFailed { id: id.to_string() });
        }

        tracing::info!(course_id = %updated.id, "Course updated");
        Ok(updated)
    }

    /// Deletes a course and returns a confirmation naming it.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::NotFound`] if no course has this id.
    /// Returns [`CourseError::DeleteFailed`] if the store removed nothing.
    /// Returns [`CourseError::Repository`] on storage errors.
    pub async fn remove(&self, id: &str) -> Result<DeleteConfirmation, CourseError> {
        let course = self.find_one(id).await?;

        if !self.repository.delete(&course).await? {
            tracing::warn!(course_id = %course.id, "Failed to delete course");
            return Err(CourseError::DeleteFailed { id: id.to_string() });
        }

        tracing::info!(course_id = %course.id, title = %course.title, "Course deleted");
        Ok(DeleteConfirmation {
            message: format!("Course {} has been successfully deleted", course.title),
        })
    }

    /// Checks that the underlying store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::Repository`] if the store does not answer.
    pub async fn check_storage(&self) -> Result<(), CourseError> {
        Ok(self.repository.ping().await?)
    }
}

fn parse_id(id: &str) -> Result<Uuid, CourseError> {
    Uuid::parse_str(id).map_err(|_| not_found(id))
}

fn not_found(id: &str) -> CourseError {
    CourseError::NotFound { id: id.to_string() }
}

fn duplicate_title_or(error: RepositoryError, title: &str) -> CourseError {
    match error {
        RepositoryError::UniqueViolation { .. } => CourseError::DuplicateTitle {
            title: title.to_string(),
        },
        other => CourseError::Repository(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Level;
    use crate::domain::repositories::MockCourseRepository;

    fn create_test_course(id: Uuid, title: &str) -> Course {
        Course::new(
            id,
            title.to_string(),
            "This is a new course".to_string(),
            Level::Beginner,
        )
    }

    fn new_course(title: &str) -> NewCourse {
        NewCourse {
            title: title.to_string(),
            description: "This is a new course".to_string(),
            level: Level::Beginner,
        }
    }

    #[tokio::test]
    async fn test_create_course_success() {
        let mut mock_repo = MockCourseRepository::new();
        let id = Uuid::new_v4();

        mock_repo
            .expect_find_by_title()
            .withf(|title| title == "La prehistoire")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .withf(|c| c.title == "La prehistoire" && c.level == Level::Beginner)
            .times(1)
            .returning(move |c| Ok(Course::new(id, c.title, c.description, c.level)));

        let service = CourseService::new(Arc::new(mock_repo));

        let course = service.create(new_course("La prehistoire")).await.unwrap();

        assert_eq!(course.id, id);
        assert_eq!(course.title, "La prehistoire");
        assert_eq!(course.description, "This is a new course");
        assert_eq!(course.level, Level::Beginner);
    }

    #[tokio::test]
    async fn test_create_course_duplicate_title() {
        let mut mock_repo = MockCourseRepository::new();

        let existing = create_test_course(Uuid::new_v4(), "La prehistoire");
        mock_repo
            .expect_find_by_title()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_insert().never();

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.create(new_course("La prehistoire")).await;

        match result {
            Err(CourseError::DuplicateTitle { title }) => assert_eq!(title, "La prehistoire"),
            other => panic!("expected DuplicateTitle, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_course_unique_violation_maps_to_duplicate_title() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo.expect_find_by_title().returning(|_| Ok(None));
        mock_repo.expect_insert().times(1).returning(|_| {
            Err(RepositoryError::UniqueViolation {
                constraint: "courses_title_key".to_string(),
            })
        });

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.create(new_course("Raced")).await;

        assert!(matches!(result, Err(CourseError::DuplicateTitle { .. })));
    }

    #[tokio::test]
    async fn test_find_all_returns_every_course() {
        let mut mock_repo = MockCourseRepository::new();

        let courses = vec![
            create_test_course(Uuid::new_v4(), "La prehistoire"),
            create_test_course(Uuid::new_v4(), "La prehistoire 2"),
        ];
        let expected = courses.clone();
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(courses.clone()));

        let service = CourseService::new(Arc::new(mock_repo));

        assert_eq!(service.find_all().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_find_one_success() {
        let mut mock_repo = MockCourseRepository::new();
        let id = Uuid::new_v4();

        let course = create_test_course(id, "La prehistoire");
        mock_repo
            .expect_find_by_id()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(move |_| Ok(Some(course.clone())));

        let service = CourseService::new(Arc::new(mock_repo));

        let found = service.find_one(&id.to_string()).await.unwrap();
        assert_eq!(found.title, "La prehistoire");
    }

    #[tokio::test]
    async fn test_find_one_not_found() {
        let mut mock_repo = MockCourseRepository::new();
        let id = Uuid::new_v4();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CourseService::new(Arc::new(mock_repo));

        match service.find_one(&id.to_string()).await {
            Err(CourseError::NotFound { id: missing }) => assert_eq!(missing, id.to_string()),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_one_malformed_id_skips_store() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_find_by_id().never();

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.find_one("badId").await;

        assert!(matches!(result, Err(CourseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_course_success() {
        let mut mock_repo = MockCourseRepository::new();
        let id = Uuid::new_v4();

        mock_repo
            .expect_apply_update()
            .withf(move |candidate, patch| {
                *candidate == id && patch.level == Some(Level::Intermediate)
            })
            .times(1)
            .returning(|id, patch| {
                Ok(Some(
                    create_test_course(id, "La prehistoire").merged(&patch),
                ))
            });

        let service = CourseService::new(Arc::new(mock_repo));

        let patch = CoursePatch {
            level: Some(Level::Intermediate),
            ..Default::default()
        };
        let updated = service.update(&id.to_string(), patch).await.unwrap();

        assert_eq!(updated.level, Level::Intermediate);
        assert_eq!(updated.title, "La prehistoire");
    }

    #[tokio::test]
    async fn test_update_course_not_found() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_apply_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service
            .update(&Uuid::new_v4().to_string(), CoursePatch::default())
            .await;

        assert!(matches!(result, Err(CourseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_course_rename_onto_existing_title() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo.expect_apply_update().returning(|_, _| {
            Err(RepositoryError::UniqueViolation {
                constraint: "courses_title_key".to_string(),
            })
        });

        let service = CourseService::new(Arc::new(mock_repo));

        let patch = CoursePatch {
            title: Some("Taken".to_string()),
            ..Default::default()
        };
        let result = service.update(&Uuid::new_v4().to_string(), patch).await;

        match result {
            Err(CourseError::DuplicateTitle { title }) => assert_eq!(title, "Taken"),
            other => panic!("expected DuplicateTitle, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_course_store_returns_other_record() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_apply_update()
            .returning(|_, _| Ok(Some(create_test_course(Uuid::new_v4(), "Other"))));

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service
            .update(&Uuid::new_v4().to_string(), CoursePatch::default())
            .await;

        assert!(matches!(result, Err(CourseError::UpdateFailed { .. })));
    }

    #[tokio::test]
    async fn test_remove_course_success() {
        let mut mock_repo = MockCourseRepository::new();
        let id = Uuid::new_v4();

        let course = create_test_course(id, "La prehistoire");
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(course.clone())));
        mock_repo
            .expect_delete()
            .withf(move |c| c.id == id)
            .times(1)
            .returning(|_| Ok(true));

        let service = CourseService::new(Arc::new(mock_repo));

        let confirmation = service.remove(&id.to_string()).await.unwrap();

        assert_eq!(
            confirmation.message,
            "Course La prehistoire has been successfully deleted"
        );
    }

    #[tokio::test]
    async fn test_remove_course_not_found() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete().never();

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.remove(&Uuid::new_v4().to_string()).await;

        assert!(matches!(result, Err(CourseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_course_delete_removes_nothing() {
        let mut mock_repo = MockCourseRepository::new();
        let id = Uuid::new_v4();

        let course = create_test_course(id, "Vanishing");
        mock_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(course.clone())));
        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = CourseService::new(Arc::new(mock_repo));

        let err = service.remove(&id.to_string()).await.unwrap_err();

        assert!(matches!(err, CourseError::DeleteFailed { .. }));
        assert_eq!(
            err.to_string(),
            format!("Failed to delete course with ID {id}")
        );
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_list()
            .returning(|| Err(RepositoryError::backend("connection refused")));

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.find_all().await;

        assert!(matches!(result, Err(CourseError::Repository(_))));
    }
}
