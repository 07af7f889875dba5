//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Business-rule failures
//!
//! The domain layer has no dependency on the HTTP or persistence layers.
//! Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;
