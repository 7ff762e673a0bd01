//! DTOs for article retrieval and listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Article, ArticleSummary};
use crate::utils::timestamp::serialize_millis;

/// Full article as returned by `GET /api/articles/{article_id}`.
#[derive(Debug, Serialize)]
pub struct ArticleItem {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

impl From<Article> for ArticleItem {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.article_id,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.article_img_url,
        }
    }
}

/// Response wrapping a single article.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleItem,
}

/// Article entry in a listing: no body, with a comment count.
#[derive(Debug, Serialize)]
pub struct ArticleSummaryItem {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<ArticleSummary> for ArticleSummaryItem {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            article_id: summary.article_id,
            title: summary.title,
            topic: summary.topic,
            author: summary.author,
            created_at: summary.created_at,
            votes: summary.votes,
            article_img_url: summary.article_img_url,
            comment_count: summary.comment_count,
        }
    }
}

/// Response for `GET /api/articles`.
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleSummaryItem>,
}
