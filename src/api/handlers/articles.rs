//! Handlers for articles and their comments.

use axum::{Json, extract::State};

use crate::api::dto::article::{ArticleListResponse, ArticleResponse, ArticleSummaryItem};
use crate::api::dto::comment::{CommentItem, CommentListResponse};
use crate::api::extractors::ArticleIdParam;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all articles, newest first, without their bodies.
///
/// # Endpoint
///
/// `GET /api/articles`
pub async fn article_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ArticleListResponse>, AppError> {
    let articles = state.article_service.list_articles().await?;

    Ok(Json(ArticleListResponse {
        articles: articles.into_iter().map(ArticleSummaryItem::from).collect(),
    }))
}

/// Retrieves a single article.
///
/// # Endpoint
///
/// `GET /api/articles/{article_id}`
///
/// # Response
///
/// ```json
/// {
///   "article": {
///     "article_id": 1,
///     "title": "Living in the shadow of a great man",
///     "topic": "mitch",
///     "author": "butter_bridge",
///     "body": "I find this existence challenging",
///     "created_at": "2020-07-09T20:11:00.000Z",
///     "votes": 100,
///     "article_img_url": "https://..."
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `article_id` is not an integer.
/// Returns 404 Not Found if no article has this id.
pub async fn article_handler(
    State(state): State<AppState>,
    ArticleIdParam(article_id): ArticleIdParam,
) -> Result<Json<ArticleResponse>, AppError> {
    let article = state.article_service.get_article(article_id).await?;

    Ok(Json(ArticleResponse {
        article: article.into(),
    }))
}

/// Lists the comments of an article, oldest first.
///
/// # Endpoint
///
/// `GET /api/articles/{article_id}/comments`
///
/// # Response
///
/// `{ "comment": [...] }`; the list is empty for an article without comments.
///
/// # Errors
///
/// Returns 400 Bad Request if `article_id` is not an integer.
/// Returns 404 Not Found if no article has this id.
pub async fn article_comments_handler(
    State(state): State<AppState>,
    ArticleIdParam(article_id): ArticleIdParam,
) -> Result<Json<CommentListResponse>, AppError> {
    let comments = state.article_service.list_comments(article_id).await?;

    Ok(Json(CommentListResponse {
        comment: comments.into_iter().map(CommentItem::from).collect(),
    }))
}
