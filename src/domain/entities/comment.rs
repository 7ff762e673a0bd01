//! Comment entity.

use chrono::{DateTime, Utc};

/// A reader comment attached to an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
}
