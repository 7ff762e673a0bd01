//! Business logic services for the application layer.

pub mod article_service;
pub mod topic_service;
pub mod user_service;

pub use article_service::ArticleService;
pub use topic_service::TopicService;
pub use user_service::UserService;
