//! Domain layer containing the news entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (topics, articles, comments, users)
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Lookup semantics ("not found" handling) live in [`crate::application::services`]

pub mod entities;
pub mod repositories;
