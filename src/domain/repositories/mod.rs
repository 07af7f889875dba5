//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod course_repository;

pub use course_repository::{CourseRepository, RepositoryError};

#[cfg(test)]
pub use course_repository::MockCourseRepository;
