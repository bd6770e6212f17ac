//! Skycast CLI
//!
//! Prints current weather and a short forecast for a location.

#![allow(clippy::print_stdout)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, LogWriter, build_forecast_service, init_telemetry};
use presentation_cli::{
    Cli, log_filter_from_verbosity,
    render::{USAGE_HINT, render_error, render_forecast},
};
use tracing::debug;

/// Conventional exit status for SIGINT
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    init_telemetry(&config.telemetry, LogWriter::Stderr)
        .context("Failed to initialize logging")?;
    config.validate().context("Invalid configuration")?;

    let request = cli.command.to_request();
    if !request.has_location() {
        println!("{USAGE_HINT}");
        return Ok(ExitCode::SUCCESS);
    }

    let service = build_forecast_service(&config).context("Failed to build forecast service")?;
    debug!(?request, "Requesting forecast");

    println!("🌤️  Fetching weather data...");
    tokio::select! {
        result = service.get_forecast(&request) => {
            match result {
                Ok(response) => println!("{}", render_forecast(&response)),
                Err(e) => println!("{}", render_error(&e)),
            }
            Ok(ExitCode::SUCCESS)
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\nInterrupted");
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
    }
}
