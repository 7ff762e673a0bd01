//! PostgreSQL implementation of topic repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Topic;
use crate::domain::repositories::TopicRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct TopicRow {
    slug: String,
    description: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Topic {
            slug: row.slug,
            description: row.description,
        }
    }
}

/// PostgreSQL repository for topics.
pub struct PgTopicRepository {
    pool: Arc<PgPool>,
}

impl PgTopicRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    async fn list(&self) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query_as::<_, TopicRow>(
            r#"
            SELECT slug, description
            FROM topics
            ORDER BY slug
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }
}
