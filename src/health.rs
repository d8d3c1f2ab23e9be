use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::models::HealthResponse;

/// Liveness probe: constant payload, no dependency checks
pub async fn liveness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::up()))
}
