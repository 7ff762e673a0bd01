//! Repository trait for topics.

use crate::domain::entities::Topic;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the `topics` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTopicRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Lists every topic, ordered by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Topic>, AppError>;
}
