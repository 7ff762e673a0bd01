//! API route configuration.

use crate::api::handlers::{
    api_catalog_handler, article_comments_handler, article_handler, article_list_handler,
    topic_list_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /api`                                - Endpoint catalog
/// - `GET /api/topics`                         - List topics
/// - `GET /api/articles`                       - List articles
/// - `GET /api/articles/{article_id}`          - Single article
/// - `GET /api/articles/{article_id}/comments` - Comments of an article, oldest first
/// - `GET /api/users`                          - List users
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(api_catalog_handler))
        .route("/api/topics", get(topic_list_handler))
        .route("/api/articles", get(article_list_handler))
        .route("/api/articles/{article_id}", get(article_handler))
        .route(
            "/api/articles/{article_id}/comments",
            get(article_comments_handler),
        )
        .route("/api/users", get(user_list_handler))
}
