//! Command-line arguments

use application::ForecastRequest;
use clap::{Parser, Subcommand};

/// Skycast CLI
#[derive(Debug, Parser)]
#[command(name = "skycast-cli")]
#[command(author, version, about = "Current weather and a short forecast for any location", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get current weather and forecast for a location
    ///
    /// Examples:
    ///   skycast-cli weather --zipcode 90210
    ///   skycast-cli weather --city "Los Angeles" --state CA
    ///   skycast-cli weather --city Toronto --state ON --country CA
    Weather {
        /// US zipcode (e.g., 90210)
        #[arg(short, long)]
        zipcode: Option<String>,

        /// City name
        #[arg(short, long)]
        city: Option<String>,

        /// State or province
        #[arg(short, long)]
        state: Option<String>,

        /// Country name or code
        #[arg(short = 'C', long)]
        country: Option<String>,
    },
}

impl Commands {
    /// Forecast request described by the `weather` arguments
    #[must_use]
    pub fn to_request(&self) -> ForecastRequest {
        match self {
            Self::Weather {
                zipcode,
                city,
                state,
                country,
            } => ForecastRequest {
                zipcode: zipcode.clone(),
                city: city.clone(),
                state: state.clone(),
                country: country.clone(),
            },
        }
    }
}

/// Determine log filter level from verbosity count
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
