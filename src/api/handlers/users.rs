//! Handler for user listing.

use axum::{Json, extract::State};

use crate::api::dto::user::{UserItem, UserListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserItem::from).collect(),
    }))
}
