//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and wraps
//! resources that live outside the process.
//!
//! # Modules
//!
//! - [`catalog`] - Endpoint catalog file served at `GET /api`
//! - [`persistence`] - PostgreSQL repository implementations

pub mod catalog;
pub mod persistence;

pub use catalog::EndpointCatalog;
