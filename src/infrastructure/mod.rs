//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`persistence`] - PostgreSQL and in-memory course stores

pub mod persistence;
