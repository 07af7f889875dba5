//! Handlers for course endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::course::{
    CourseResponse, CreateCourseRequest, DeleteCourseResponse, UpdateCourseRequest,
};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Creates a course.
///
/// # Endpoint
///
/// `POST /courses`
///
/// # Errors
///
/// Returns 400 if the body is invalid or a course with the same title exists.
#[utoipa::path(
    post,
    path = "/courses",
    tag = "courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "The course has been successfully created.", body = CourseResponse),
        (status = 400, description = "Invalid body or duplicate title.", body = ErrorBody),
    )
)]
pub async fn create_course_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let course = state.course_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// Lists all courses.
///
/// # Endpoint
///
/// `GET /courses`
#[utoipa::path(
    get,
    path = "/courses",
    tag = "courses",
    responses(
        (status = 200, description = "Every stored course.", body = [CourseResponse]),
    )
)]
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state.course_service.find_all().await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Fetches a course by id.
///
/// # Endpoint
///
/// `GET /courses/{id}`
///
/// # Errors
///
/// Returns 404 if no course has this id.
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "courses",
    params(("id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "The course has been successfully found.", body = CourseResponse),
        (status = 404, description = "No course with this id.", body = ErrorBody),
    )
)]
pub async fn get_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = state.course_service.find_one(&id).await?;

    Ok(Json(course.into()))
}

/// Partially updates a course.
///
/// # Endpoint
///
/// `PUT /courses/{id}`
///
/// Any subset of `title`, `description` and `level` may be sent; the rest keep
/// their stored values.
///
/// # Errors
///
/// Returns 400 if the body is invalid or the new title belongs to another course.
/// Returns 404 if no course has this id.
#[utoipa::path(
    put,
    path = "/courses/{id}",
    tag = "courses",
    params(("id" = String, Path, description = "Course identifier")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "The course has been successfully updated.", body = CourseResponse),
        (status = 400, description = "Invalid body.", body = ErrorBody),
        (status = 404, description = "No course with this id.", body = ErrorBody),
    )
)]
pub async fn update_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<Json<CourseResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let course = state.course_service.update(&id, payload.into()).await?;

    Ok(Json(course.into()))
}

/// Deletes a course.
///
/// # Endpoint
///
/// `DELETE /courses/{id}`
///
/// # Response
///
/// ```json
/// { "message": "Course Intro has been successfully deleted" }
/// ```
///
/// # Errors
///
/// Returns 404 if no course has this id.
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = "courses",
    params(("id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "The course has been successfully deleted.", body = DeleteCourseResponse),
        (status = 404, description = "No course with this id.", body = ErrorBody),
    )
)]
pub async fn delete_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteCourseResponse>, AppError> {
    let confirmation = state.course_service.remove(&id).await?;

    Ok(Json(confirmation.into()))
}
