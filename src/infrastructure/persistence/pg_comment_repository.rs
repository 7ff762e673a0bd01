//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Comment;
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct CommentRow {
    comment_id: i32,
    article_id: i32,
    votes: i32,
    created_at: DateTime<Utc>,
    author: String,
    body: String,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            comment_id: row.comment_id,
            article_id: row.article_id,
            votes: row.votes,
            created_at: row.created_at,
            author: row.author,
            body: row.body,
        }
    }
}

/// PostgreSQL repository for comments.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn list_by_article(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        // comment_id breaks ties so equal timestamps keep a stable order.
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, article_id, votes, created_at, author, body
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at ASC, comment_id ASC
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}
