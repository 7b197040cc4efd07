use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload returned by the health check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "API server is running".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Payload returned by the login connectivity probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginProbeResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LoginProbeResponse {
    pub fn reachable() -> Self {
        Self {
            success: true,
            message: "Login endpoint is reachable".to_string(),
            timestamp: Utc::now(),
        }
    }
}
