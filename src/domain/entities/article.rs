//! Article entities: the full article and its listing summary.

use chrono::{DateTime, Utc};

/// A news article as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    /// Slug of the [`Topic`](super::Topic) the article is filed under.
    pub topic: String,
    /// Username of the author.
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

/// An article as it appears in listings.
///
/// Carries every [`Article`] field except the body, plus the number of
/// comments attached to the article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}
