//! Skycast HTTP Server
//!
//! Main entry point for the web interface and JSON API.

use std::time::Duration;

use anyhow::Context;
use infrastructure::{AppConfig, LogWriter, build_forecast_service, init_telemetry};
use presentation_http::{AppState, create_app};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_telemetry(&config.telemetry, LogWriter::Stdout).context("Failed to initialize logging")?;
    config.validate().context("Invalid configuration")?;

    info!("🌤️ Skycast v{} starting...", env!("CARGO_PKG_VERSION"));

    let service = build_forecast_service(&config).context("Failed to build forecast service")?;
    let state = AppState::new(service).context("Failed to compile templates")?;
    let app = create_app(state, &config.server);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "🚀 Server listening");

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await
        .context("Server error")?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!(
        timeout_secs = timeout.as_secs(),
        "Waiting for in-flight requests to complete"
    );
}
