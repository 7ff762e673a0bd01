//! Topic listing service.

use std::sync::Arc;

use crate::domain::entities::Topic;
use crate::domain::repositories::TopicRepository;
use crate::error::AppError;

/// Service for reading topics.
pub struct TopicService<R: TopicRepository> {
    repository: Arc<R>,
}

impl<R: TopicRepository> TopicService<R> {
    /// Creates a new topic service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all topics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        self.repository.list().await
    }
}
