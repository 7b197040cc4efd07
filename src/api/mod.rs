pub mod auth;
pub mod health;
mod rejection;

pub use rejection::ApiError;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::AppConfig;

/// HTTP server exposing the connectivity probe endpoints
pub struct ApiServer {
    config: AppConfig,
}

impl ApiServer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Bind the listener and serve until the process terminates.
    ///
    /// A bind failure (port taken, insufficient privilege) is returned to
    /// the caller unchanged; there is no retry or fallback port.
    pub async fn start(&self) -> Result<()> {
        let app = router();

        let bind_addr = self.config.server.bind_addr();
        let listener = TcpListener::bind(&bind_addr).await?;

        info!("Server listening on {}", bind_addr);
        info!(
            "Health check: http://localhost:{}/health",
            self.config.server.port
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the application router: the two probe routes behind permissive
/// CORS and per-request tracing.
pub fn router() -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
