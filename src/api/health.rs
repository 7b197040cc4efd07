use axum::{Router, response::Json, routing::get};

use crate::types::HealthResponse;

/// Create health router
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
