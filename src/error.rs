//! HTTP-facing error type.
//!
//! Every failure leaving a handler is an [`AppError`], rendered as
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": { ... } } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::errors::CourseError;

/// Response body wrapping [`ErrorInfo`].
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Machine-readable code, human-readable message and structured details.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorInfo {
    #[schema(value_type = String, example = "not_found")]
    pub code: &'static str,
    pub message: String,
    #[schema(value_type = Object)]
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable body.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{}: {}", info.code, info.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<CourseError> for AppError {
    fn from(e: CourseError) -> Self {
        let message = e.to_string();

        match e {
            CourseError::DuplicateTitle { title } => {
                AppError::bad_request(message, json!({ "title": title }))
            }
            CourseError::NotFound { id } | CourseError::DeleteFailed { id } => {
                AppError::not_found(message, json!({ "id": id }))
            }
            CourseError::UpdateFailed { id } => {
                AppError::bad_request(message, json!({ "id": id }))
            }
            CourseError::Repository(source) => {
                tracing::error!(error = %source, "Course storage failure");
                AppError::internal("Internal server error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_default();
        AppError::bad_request("Validation failed", json!({ "fields": details }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::RepositoryError;

    #[test]
    fn test_duplicate_title_is_bad_request() {
        let err = AppError::from(CourseError::DuplicateTitle {
            title: "Intro".to_string(),
        });

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let info = err.to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Course with title Intro already exists");
        assert_eq!(info.details["title"], "Intro");
    }

    #[test]
    fn test_not_found_keeps_id() {
        let err = AppError::from(CourseError::NotFound {
            id: "abc".to_string(),
        });

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let info = err.to_error_info();
        assert_eq!(info.message, "Course with ID abc not found");
        assert_eq!(info.details["id"], "abc");
    }

    #[test]
    fn test_delete_failed_is_not_found() {
        let err = AppError::from(CourseError::DeleteFailed {
            id: "abc".to_string(),
        });

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_error_info().message,
            "Failed to delete course with ID abc"
        );
    }

    #[test]
    fn test_update_failed_is_bad_request() {
        let err = AppError::from(CourseError::UpdateFailed {
            id: "abc".to_string(),
        });

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_error_info().message,
            "Failed to update course with ID abc"
        );
    }

    #[test]
    fn test_repository_failure_hides_cause() {
        let err = AppError::from(CourseError::Repository(RepositoryError::backend(
            "password authentication failed for user postgres",
        )));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert!(!info.message.contains("password"));
    }
}
