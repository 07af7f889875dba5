//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization, validator for
//! input validation and utoipa for their OpenAPI schemas.

pub mod course;
pub mod health;
