//! DTOs for topic listing.

use serde::Serialize;

use crate::domain::entities::Topic;

/// Individual topic information.
#[derive(Debug, Serialize)]
pub struct TopicItem {
    pub slug: String,
    pub description: String,
}

impl From<Topic> for TopicItem {
    fn from(topic: Topic) -> Self {
        Self {
            slug: topic.slug,
            description: topic.description,
        }
    }
}

/// Response for `GET /api/topics`.
#[derive(Debug, Serialize)]
pub struct TopicListResponse {
    pub topics: Vec<TopicItem>,
}
