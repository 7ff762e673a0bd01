//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Runs a trivial query through the pool
/// 2. **Catalog**: Reads and parses the endpoint catalog file
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, pool size: 3" },
///     "catalog": { "status": "ok", "message": "Loaded from endpoints.json" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let catalog_check = check_catalog(&state).await;

    let all_healthy = db_check.is_ok() && catalog_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            catalog: catalog_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query("SELECT 1").execute(state.pool.as_ref()).await {
        Ok(_) => CheckStatus::ok(format!("Connected, pool size: {}", state.pool.size())),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            CheckStatus::error("Database unreachable")
        }
    }
}

async fn check_catalog(state: &AppState) -> CheckStatus {
    match state.catalog.load().await {
        Ok(_) => CheckStatus::ok(format!(
            "Loaded from {}",
            state.catalog.path().display()
        )),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: endpoint catalog unavailable");
            CheckStatus::error("Endpoint catalog unavailable")
        }
    }
}
