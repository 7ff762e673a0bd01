//! Repository trait for articles.

use crate::domain::entities::{Article, ArticleSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the `articles` table.
///
/// Lookups return `Option`; turning absence into a "not found" failure is the
/// job of [`crate::application::services::ArticleService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_article.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Finds an article by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadInput`] if the store rejects the identifier.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn find_by_id(&self, article_id: i32) -> Result<Option<Article>, AppError>;

    /// Returns whether an article with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, article_id: i32) -> Result<bool, AppError>;

    /// Lists every article, newest first, with its comment count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<ArticleSummary>, AppError>;
}
