//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every course and health route together with their
//! request, response and error schemas. The document is served at
//! [`OPENAPI_PATH`] and rendered by Swagger UI at [`SWAGGER_UI_PATH`].

use utoipa::OpenApi;

use crate::api::dto::course::{
    CourseResponse, CreateCourseRequest, DeleteCourseResponse, UpdateCourseRequest,
};
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::Level;
use crate::error::{ErrorBody, ErrorInfo};

/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/docs";

/// Path of the generated OpenAPI JSON document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courses API",
        description = "Create, list, fetch, update and delete courses.",
        license(name = "MIT")
    ),
    paths(
        crate::api::handlers::courses::create_course_handler,
        crate::api::handlers::courses::list_courses_handler,
        crate::api::handlers::courses::get_course_handler,
        crate::api::handlers::courses::update_course_handler,
        crate::api::handlers::courses::delete_course_handler,
        crate::api::handlers::health::health_handler,
    ),
    components(schemas(
        CreateCourseRequest,
        UpdateCourseRequest,
        CourseResponse,
        DeleteCourseResponse,
        Level,
        ErrorBody,
        ErrorInfo,
        HealthResponse,
        HealthChecks,
        CheckStatus,
    )),
    tags(
        (name = "courses", description = "Courses API"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
