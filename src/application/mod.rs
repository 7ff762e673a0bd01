//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers. They own the lookup semantics: absence becomes a typed
//! "not found" failure, and comment listings are guarded by an article
//! existence check.
//!
//! # Available Services
//!
//! - [`services::article_service::ArticleService`] - Articles and their comments
//! - [`services::topic_service::TopicService`] - Topic listing
//! - [`services::user_service::UserService`] - User listing

pub mod services;
