//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check: database, endpoint catalog
//! - `/api/*`      - Read-only REST API (see [`crate::api::routes`])
//! - anything else - `404 { "msg": "not found!" }`, including a known path
//!   requested with an unsupported method
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, route_not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, the not-found fallback and tracing.
///
/// Paths are matched as-is; use [`app_router`] to also accept trailing slashes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .fallback(route_not_found_handler)
        .method_not_allowed_fallback(route_not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router served by the HTTP server.
///
/// Trailing slashes are trimmed before routing, so `/api/topics/` is
/// handled like `/api/topics`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
