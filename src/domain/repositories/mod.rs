//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! following the Repository pattern. Concrete implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`TopicRepository`] - Topic listing
//! - [`ArticleRepository`] - Article lookup, existence checks and listing
//! - [`CommentRepository`] - Comments of an article
//! - [`UserRepository`] - User listing
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests. See
//! integration tests in `tests/repository_*.rs` for usage against PostgreSQL.

pub mod article_repository;
pub mod comment_repository;
pub mod topic_repository;
pub mod user_repository;

pub use article_repository::ArticleRepository;
pub use comment_repository::CommentRepository;
pub use topic_repository::TopicRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use topic_repository::MockTopicRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
