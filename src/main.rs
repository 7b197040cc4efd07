use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use conncheck::api::ApiServer;
use conncheck::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    setup_logging(&config.logging.level);

    info!("Starting conncheck server");

    ApiServer::new(config).start().await
}

fn setup_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
