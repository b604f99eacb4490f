// ============================================================================
// DineDir API - Debug Handler
// File: crates/dinedir-api/src/handlers/debug.rs
// ============================================================================
//! Store inspection endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;

use dinedir_core::domain::StoreReport;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Store report - GET /api/debug
pub async fn database_report(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StoreReport>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.inspector.report().await {
        Ok(report) => Ok(Json(ApiResponse::success(report))),
        Err(e) => {
            error!("Error inspecting database: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("DATABASE_ERROR", &e.to_string())),
            ))
        }
    }
}
