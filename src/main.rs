use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use marscredit_api::{config, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Load configuration
    let config = config::Config::from_env()?;
    info!(
        "Configuration loaded ({:?}), upstream timeout {:?}",
        config.app_env, config.upstream.timeout
    );

    // Build our application with routes
    let app = router::create_router(&config)?;

    // Run our application
    let ip = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST {}", config.host))?;
    let addr = SocketAddr::new(ip, config.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
