//! Article and comment retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Article, ArticleSummary, Comment};
use crate::domain::repositories::{ArticleRepository, CommentRepository};
use crate::error::AppError;

/// Message carried by the 404 returned for a missing article.
pub const ARTICLE_NOT_FOUND: &str = "article not found!";

/// Service for reading articles and their comments.
///
/// Turns repository-level absence into [`AppError::NotFound`] and guarantees
/// that a comment listing is only produced for an article that exists.
pub struct ArticleService<A: ArticleRepository, C: CommentRepository> {
    article_repository: Arc<A>,
    comment_repository: Arc<C>,
}

impl<A: ArticleRepository, C: CommentRepository> ArticleService<A, C> {
    /// Creates a new article service.
    pub fn new(article_repository: Arc<A>, comment_repository: Arc<C>) -> Self {
        Self {
            article_repository,
            comment_repository,
        }
    }

    /// Retrieves a single article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article has this id.
    /// Returns [`AppError::BadInput`] if the store rejects the identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_article(&self, article_id: i32) -> Result<Article, AppError> {
        self.article_repository
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::not_found(ARTICLE_NOT_FOUND))
    }

    /// Lists all articles, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_articles(&self) -> Result<Vec<ArticleSummary>, AppError> {
        self.article_repository.list().await
    }

    /// Lists the comments of an article, oldest first.
    ///
    /// The article is looked up before its comments: an empty result then
    /// unambiguously means "no comments yet".
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_comments(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        if !self.article_repository.exists(article_id).await? {
            return Err(AppError::not_found(ARTICLE_NOT_FOUND));
        }

        self.comment_repository.list_by_article(article_id).await
    }
}
