//! DTOs for the course endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::services::DeleteConfirmation;
use crate::domain::entities::{Course, CoursePatch, Level, NewCourse};

/// Request body for `POST /courses`.
///
/// All three fields are required. `level` must be one of the known labels;
/// any other value fails deserialization and is reported as a 400.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    /// Course title, unique across all courses.
    #[validate(length(min = 1, message = "title must not be empty"))]
    #[schema(example = "Intro")]
    pub title: String,

    /// Free-form description.
    #[validate(length(min = 1, message = "description must not be empty"))]
    #[schema(example = "Basics")]
    pub description: String,

    pub level: Level,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        NewCourse {
            title: req.title,
            description: req.description,
            level: req.level,
        }
    }
}

/// Request body for `PUT /courses/{id}`.
///
/// All fields are optional and only provided fields are changed. Provided
/// strings must still be non-empty.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    pub level: Option<Level>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        CoursePatch {
            title: req.title,
            description: req.description,
            level: req.level,
        }
    }
}

/// JSON representation of a course.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub level: Level,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        CourseResponse {
            id: course.id,
            title: course.title,
            description: course.description,
            level: course.level,
        }
    }
}

/// Confirmation returned by `DELETE /courses/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteCourseResponse {
    #[schema(example = "Course Intro has been successfully deleted")]
    pub message: String,
}

impl From<DeleteConfirmation> for DeleteCourseResponse {
    fn from(confirmation: DeleteConfirmation) -> Self {
        DeleteCourseResponse {
            message: confirmation.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_known_level() {
        let req: CreateCourseRequest = serde_json::from_str(
            r#"{"title": "Intro", "description": "Basics", "level": "Débutant"}"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.level, Level::Beginner);
    }

    #[test]
    fn test_create_request_rejects_unknown_level() {
        let result = serde_json::from_str::<CreateCourseRequest>(
            r#"{"title": "Intro", "description": "Basics", "level": "Expert"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_rejects_missing_field() {
        let result = serde_json::from_str::<CreateCourseRequest>(
            r#"{"title": "Intro", "level": "Débutant"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_empty_title_fails_validation() {
        let req: CreateCourseRequest = serde_json::from_str(
            r#"{"title": "", "description": "Basics", "level": "Avancé"}"#,
        )
        .unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let req: UpdateCourseRequest = serde_json::from_str("{}").unwrap();

        assert!(req.validate().is_ok());
        assert!(CoursePatch::from(req).is_empty());
    }

    #[test]
    fn test_update_request_empty_description_fails_validation() {
        let req = UpdateCourseRequest {
            description: Some(String::new()),
            ..Default::default()
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_course_response_serializes_level_label() {
        let id = Uuid::new_v4();
        let response = CourseResponse::from(Course::new(
            id,
            "Intro".to_string(),
            "Basics".to_string(),
            Level::Intermediate,
        ));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["level"], "Intermédiaire");
    }
}
