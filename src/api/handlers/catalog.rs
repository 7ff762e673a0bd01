//! Handler for the endpoint catalog.

use axum::{Json, extract::State};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

/// Describes every available endpoint.
///
/// # Endpoint
///
/// `GET /api`
///
/// # Response
///
/// The contents of the endpoint catalog file, read at request time.
///
/// # Errors
///
/// Returns 500 if the catalog cannot be read or parsed.
pub async fn api_catalog_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let catalog = state.catalog.load().await?;

    Ok(Json(catalog))
}
