//! PostgreSQL implementation of the course repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Course, CoursePatch, Level, NewCourse};
use crate::domain::repositories::{CourseRepository, RepositoryError};
use crate::utils::db_error::map_sqlx_error;

/// Row shape of the `courses` table as selected by every query below.
#[derive(Debug, FromRow)]
struct CourseRow {
    id: Uuid,
    title: String,
    description: String,
    level: String,
}

impl TryFrom<CourseRow> for Course {
    type Error = RepositoryError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let level = row
            .level
            .parse::<Level>()
            .map_err(RepositoryError::backend)?;

        Ok(Course::new(row.id, row.title, row.description, level))
    }
}

/// PostgreSQL repository for course storage.
///
/// Ids are generated by the database (`gen_random_uuid()`); title uniqueness is
/// backed by the `courses_title_key` constraint. Listings follow the identity
/// column `position`, which grows with every insert.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, description, level
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.map(Course::try_from).transpose()
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, description, level
            FROM courses
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.map(Course::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Course>, RepositoryError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, description, level
            FROM courses
            ORDER BY position
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn insert(&self, new_course: NewCourse) -> Result<Course, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (title, description, level)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, level
            "#,
        )
        .bind(&new_course.title)
        .bind(&new_course.description)
        .bind(new_course.level.as_str())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Course::try_from(row)
    }

    async fn apply_update(
        &self,
        id: Uuid,
        patch: CoursePatch,
    ) -> Result<Option<Course>, RepositoryError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses SET
                title       = COALESCE($2::TEXT, title),
                description = COALESCE($3::TEXT, description),
                level       = COALESCE($4::TEXT, level)
            WHERE id = $1
            RETURNING id, title, description, level
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.level.map(|level| level.as_str()))
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.map(Course::try_from).transpose()
    }

    async fn delete(&self, course: &Course) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course.id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
