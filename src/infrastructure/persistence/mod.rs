//! Course repository implementations.
//!
//! - [`PgCourseRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryCourseRepository`] - In-process storage for local runs and tests

pub mod memory_course_repository;
pub mod pg_course_repository;

pub use memory_course_repository::MemoryCourseRepository;
pub use pg_course_repository::PgCourseRepository;
