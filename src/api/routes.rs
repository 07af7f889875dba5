//! API route configuration.

use crate::api::handlers::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    update_course_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Course CRUD routes.
///
/// # Endpoints
///
/// - `POST   /courses`        - Create a course
/// - `GET    /courses`        - List all courses
/// - `GET    /courses/{id}`   - Fetch one course
/// - `PUT    /courses/{id}`   - Partially update a course
/// - `DELETE /courses/{id}`   - Delete a course
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route(
            "/courses/{id}",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
}
