//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::CourseService;
use crate::domain::repositories::CourseRepository;

/// Course service over whichever store the server was configured with.
pub type SharedCourseService = CourseService<dyn CourseRepository>;

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<SharedCourseService>,
}

impl AppState {
    /// Builds the state around a store, wiring the service on top of it.
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self {
            course_service: Arc::new(CourseService::new(repository)),
        }
    }
}
