//! Handler for topic listing.

use axum::{Json, extract::State};

use crate::api::dto::topic::{TopicItem, TopicListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all topics.
///
/// # Endpoint
///
/// `GET /api/topics`
///
/// # Response
///
/// ```json
/// { "topics": [ { "slug": "mitch", "description": "The man, the Mitch, the legend" } ] }
/// ```
pub async fn topic_list_handler(
    State(state): State<AppState>,
) -> Result<Json<TopicListResponse>, AppError> {
    let topics = state.topic_service.list_topics().await?;

    Ok(Json(TopicListResponse {
        topics: topics.into_iter().map(TopicItem::from).collect(),
    }))
}
