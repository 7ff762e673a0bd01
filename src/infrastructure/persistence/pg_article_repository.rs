//! PostgreSQL implementation of article repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Article, ArticleSummary};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ArticleRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            article_id: row.article_id,
            title: row.title,
            topic: row.topic,
            author: row.author,
            body: row.body,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
        }
    }
}

#[derive(FromRow)]
struct ArticleSummaryRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl From<ArticleSummaryRow> for ArticleSummary {
    fn from(row: ArticleSummaryRow) -> Self {
        ArticleSummary {
            article_id: row.article_id,
            title: row.title,
            topic: row.topic,
            author: row.author,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        }
    }
}

/// PostgreSQL repository for articles.
///
/// The article id is always bound as a positional parameter.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn find_by_id(&self, article_id: i32) -> Result<Option<Article>, AppError> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT article_id, title, topic, author, body, created_at, votes, article_img_url
            FROM articles
            WHERE article_id = $1
            "#,
        )
        .bind(article_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Article::from))
    }

    async fn exists(&self, article_id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)",
        )
        .bind(article_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn list(&self) -> Result<Vec<ArticleSummary>, AppError> {
        let rows = sqlx::query_as::<_, ArticleSummaryRow>(
            r#"
            SELECT a.article_id, a.title, a.topic, a.author, a.created_at, a.votes,
                   a.article_img_url, COUNT(c.comment_id) AS comment_count
            FROM articles a
            LEFT JOIN comments c ON c.article_id = a.article_id
            GROUP BY a.article_id
            ORDER BY a.created_at DESC, a.article_id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ArticleSummary::from).collect())
    }
}
