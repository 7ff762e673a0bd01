//! Core domain entities representing the news data model.
//!
//! Entities are plain data structures mirroring persisted rows. They are
//! created and destroyed outside this service (migrations and seeding); the
//! service only reads them.
//!
//! # Entity Types
//!
//! - [`Topic`] - A subject articles are filed under
//! - [`User`] - An author of articles and comments
//! - [`Article`] - A full news article
//! - [`ArticleSummary`] - An article without its body, with a comment count
//! - [`Comment`] - A reader comment attached to an article

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

pub use article::{Article, ArticleSummary};
pub use comment::Comment;
pub use topic::Topic;
pub use user::User;
