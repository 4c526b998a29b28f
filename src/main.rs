//! taskboard-rl - HTTP Server Entry Point
//!
//! Starts the HTTP server that exposes the task board and the RL
//! validation endpoints.

use taskboard_rl::{api, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_rl=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: host={} port={} seed_on_startup={}",
        config.host, config.port, config.seed_on_startup
    );

    api::serve(config).await?;

    Ok(())
}
