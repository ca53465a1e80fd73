//! pl-live - demo live score server.
//!
//! Serves fixtures over HTTP and a per-connection simulated live feed over
//! WebSocket until Ctrl+C.

use pl_live::catalog::FixtureCatalog;
use pl_live::config::ServerConfig;
use pl_live::server::{self, state::AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    let catalog = Arc::new(FixtureCatalog::premier_league());
    let addr = config.bind_addr;

    println!("════════════════════════════════════════════════════════════════");
    println!("⚽ pl-live is running on http://{}", addr);
    println!("   • GET /              - Service status");
    println!("   • GET /fixtures      - Fixture list");
    println!("   • GET /fixtures/:id  - Single fixture");
    println!("   • WS  /ws/live       - Live match updates");
    println!("════════════════════════════════════════════════════════════════");

    tracing::info!(
        fixtures = catalog.len(),
        tick_ms = %config.tick_interval.as_millis(),
        seeded = config.seed.is_some(),
        "Starting live feed server"
    );

    let state = Arc::new(AppState::new(catalog, config));
    server::run_server(state, shutdown_signal()).await?;

    println!("\n👋 pl-live has exited. Goodbye!");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    println!("\n🛑 Shutdown signal received...");
}
