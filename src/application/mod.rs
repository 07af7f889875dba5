//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers (and the admin
//! CLI) a small API that speaks in domain errors.
//!
//! # Available Services
//!
//! - [`services::course_service::CourseService`] - Course CRUD with title uniqueness

pub mod services;
