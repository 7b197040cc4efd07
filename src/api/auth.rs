use axum::{Router, extract::rejection::JsonRejection, response::Json, routing::get};
use serde_json::Value as JsonValue;

use super::ApiError;
use crate::types::LoginProbeResponse;

/// Create auth router
pub fn router() -> Router {
    Router::new().route("/api/auth/login", get(login_probe))
}

/// Connectivity probe for the auth wiring. Despite the path, no
/// credentials are read or validated; a JSON body, if supplied, is
/// decoded and then ignored.
async fn login_probe(
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<LoginProbeResponse>, ApiError> {
    match body {
        Ok(_) | Err(JsonRejection::MissingJsonContentType(_)) => {
            Ok(Json(LoginProbeResponse::reachable()))
        }
        Err(rejection) => Err(ApiError::from(rejection)),
    }
}
