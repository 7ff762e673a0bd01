//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.
//! Handlers return `Result<_, AppError>` and never build error responses
//! themselves.

pub mod articles;
pub mod catalog;
pub mod health;
pub mod not_found;
pub mod topics;
pub mod users;

pub use articles::{article_comments_handler, article_handler, article_list_handler};
pub use catalog::api_catalog_handler;
pub use health::health_handler;
pub use not_found::route_not_found_handler;
pub use topics::topic_list_handler;
pub use users::user_list_handler;
