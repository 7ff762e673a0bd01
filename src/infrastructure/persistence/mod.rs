//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Every
//! query binds its inputs as positional parameters.
//!
//! # Repositories
//!
//! - [`PgTopicRepository`] - Topic listing
//! - [`PgArticleRepository`] - Article lookup and listing
//! - [`PgCommentRepository`] - Comments of an article
//! - [`PgUserRepository`] - User listing

pub mod pg_article_repository;
pub mod pg_comment_repository;
pub mod pg_topic_repository;
pub mod pg_user_repository;

pub use pg_article_repository::PgArticleRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_topic_repository::PgTopicRepository;
pub use pg_user_repository::PgUserRepository;
