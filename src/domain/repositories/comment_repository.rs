//! Repository trait for comments.

use crate::domain::entities::Comment;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the `comments` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Lists the comments of an article, oldest first.
    ///
    /// An article without comments and a missing article both yield an empty
    /// list; callers that need to tell them apart check the article first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_article(&self, article_id: i32) -> Result<Vec<Comment>, AppError>;
}
