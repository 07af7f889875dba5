//! Helpers shared by the persistence layer.
//!
//! - [`db_error`] - SQLx error translation

pub mod db_error;
