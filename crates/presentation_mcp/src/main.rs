//! Skycast MCP server
//!
//! Serves weather tools over stdin/stdout. All logging goes to stderr.

use std::sync::Arc;

use anyhow::Context;
use infrastructure::{AppConfig, LogWriter, build_forecast_service, init_telemetry};
use presentation_mcp::McpServer;
use tokio::io::{BufReader, stdin, stdout};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_telemetry(&config.telemetry, LogWriter::Stderr).context("Failed to initialize logging")?;
    config.validate().context("Invalid configuration")?;

    let service = build_forecast_service(&config).context("Failed to build forecast service")?;
    let server = McpServer::new(Arc::new(service));

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "🌤️ Skycast MCP server ready on stdio"
    );
    server
        .serve(BufReader::new(stdin()), stdout())
        .await
        .context("MCP server failed")?;
    Ok(())
}
