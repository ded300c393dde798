// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::info;

use movieflix::{build_router, initialize_catalogue, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. LOGGING
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("movieflix=info"),
    )
    .init();

    // 2. CONFIGURATION
    let config = Config::parse();
    let data_dir = config.resolve_data_dir()?;

    // 3. REPOSITORY, SERVICES, EVENT WIRING
    let app_state = initialize_catalogue(&data_dir)
        .with_context(|| format!("Failed to load catalogue from {}", data_dir.display()))?;

    // 4. HTTP SERVER
    let app = build_router(app_state);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!("Listening on http://{}", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
