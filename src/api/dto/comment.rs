//! DTOs for article comments.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Comment;
use crate::utils::timestamp::serialize_millis;

/// Individual comment information.
#[derive(Debug, Serialize)]
pub struct CommentItem {
    pub comment_id: i32,
    pub article_id: i32,
    pub votes: i32,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
}

impl From<Comment> for CommentItem {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.comment_id,
            article_id: comment.article_id,
            votes: comment.votes,
            created_at: comment.created_at,
            author: comment.author,
            body: comment.body,
        }
    }
}

/// Response for `GET /api/articles/{article_id}/comments`.
///
/// The list is published under the singular key `comment`.
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comment: Vec<CommentItem>,
}
