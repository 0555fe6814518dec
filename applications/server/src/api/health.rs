/// Health check API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub users: usize,
}

/// GET /api/health - Health check endpoint
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users: app_state.directory.count().await?,
    }))
}
