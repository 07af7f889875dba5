#![allow(dead_code)]

use axum_test::TestServer;
use courses_api::infrastructure::persistence::MemoryCourseRepository;
use courses_api::routes::app_router;
use courses_api::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(MemoryCourseRepository::new()))
}

/// Full application router over an empty in-memory store.
pub fn create_test_server(docs_enabled: bool) -> TestServer {
    TestServer::new(app_router(create_test_state(), docs_enabled)).unwrap()
}

pub fn course_body(title: &str, level: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{title} description"),
        "level": level,
    })
}

/// Creates a course over HTTP and returns its id.
pub async fn create_course(server: &TestServer, title: &str, level: &str) -> String {
    let response = server.post("/courses").json(&course_body(title, level)).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}
