//! Fallback handler for unmatched routes.

use crate::error::AppError;

/// Answers every request that matched no route with `404 { "msg": "not found!" }`.
pub async fn route_not_found_handler() -> AppError {
    AppError::RouteNotFound
}
