//! Health check handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check - GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        service: state.config.app.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
