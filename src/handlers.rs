use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::app::AppState;
use crate::constants::MAX_BODY_SIZE;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub max_body_size: usize,
    pub db_pool_size: u32,
}

/// Health check endpoint
///
/// Touches no database connection; `db_pool_size` stays 0 until a handler
/// actually checks a connection out of the pool.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_body_size: MAX_BODY_SIZE,
        db_pool_size: state.db.pool_size(),
    })
}

/// Fallback for paths under `/api` that match no route
pub async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
