//! Core domain entities.
//!
//! Entities are plain data structures. Following the "New Type" pattern,
//! creation and partial updates use separate structs:
//!
//! - [`Course`] - A stored course
//! - [`NewCourse`] - Input for creating a course
//! - [`CoursePatch`] - Input for partially updating a course

pub mod course;

pub use course::{Course, CoursePatch, Level, NewCourse, ParseLevelError};
