use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::AppState;

/// Liveness plus a check that the store can still be read
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// `false` when the store is unreadable
    success: bool,
    /// `healthy` or `degraded`
    status: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service status, including store readability", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store_ok = match state.db.read().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read the store");
            false
        }
    };

    Json(HealthResponse {
        success: store_ok,
        status: if store_ok { "healthy" } else { "degraded" }.to_string(),
    })
}
