mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use courses_api::domain::entities::{Course, CoursePatch, NewCourse};
use courses_api::domain::repositories::{CourseRepository, RepositoryError};
use courses_api::routes::app_router;
use courses_api::state::AppState;
use std::sync::Arc;
use uuid::Uuid;

/// Store whose every call fails, standing in for an unreachable database.
struct UnreachableRepository;

fn unreachable() -> RepositoryError {
    RepositoryError::backend("connection refused")
}

#[async_trait]
impl CourseRepository for UnreachableRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Course>, RepositoryError> {
        Err(unreachable())
    }

    async fn find_by_title(&self, _title: &str) -> Result<Option<Course>, RepositoryError> {
        Err(unreachable())
    }

    async fn list(&self) -> Result<Vec<Course>, RepositoryError> {
        Err(unreachable())
    }

    async fn insert(&self, _course: NewCourse) -> Result<Course, RepositoryError> {
        Err(unreachable())
    }

    async fn apply_update(
        &self,
        _id: Uuid,
        _patch: CoursePatch,
    ) -> Result<Option<Course>, RepositoryError> {
        Err(unreachable())
    }

    async fn delete(&self, _course: &Course) -> Result<bool, RepositoryError> {
        Err(unreachable())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(unreachable())
    }
}

fn unreachable_server() -> TestServer {
    let state = AppState::new(Arc::new(UnreachableRepository));
    TestServer::new(app_router(state, false)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(false);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = unreachable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}

#[tokio::test]
async fn test_storage_failure_hides_details() {
    let server = unreachable_server();

    let response = server.get("/courses").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Internal server error");
    assert!(!json.to_string().contains("connection refused"));
}
