//! Logging initialization
//!
//! Installs the global `tracing` subscriber used by every binary. Libraries
//! only emit events; this is the one place a subscriber gets registered.

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, one line per event
    #[default]
    Text,
    /// Structured JSON, one object per line
    Json,
}

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogWriter {
    #[default]
    Stdout,
    /// Required when stdout carries a protocol (the tool server)
    Stderr,
}

impl LogWriter {
    fn make_writer(self) -> BoxMakeWriter {
        match self {
            Self::Stdout => BoxMakeWriter::new(std::io::stdout),
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "debug", "skycast=debug,tower_http=info").
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Log line format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Include module targets in log lines
    #[serde(default = "crate::config::default_true")]
    pub with_target: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Config with an explicit filter, keeping other defaults
    #[must_use]
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            log_filter: filter.into(),
            ..Self::default()
        }
    }
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter directives could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directives
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Failed to install the global subscriber (usually: already installed)
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Parse filter directives into an [`EnvFilter`]
pub fn parse_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|e| TelemetryError::InvalidFilter {
        filter: directives.to_string(),
        reason: e.to_string(),
    })
}

/// Initialize logging with the given configuration
///
/// `RUST_LOG` overrides `config.log_filter` when it is set and valid.
/// Calling this twice in one process returns [`TelemetryError::Init`].
///
/// # Example
///
/// ```ignore
/// use infrastructure::telemetry::{LogWriter, TelemetryConfig, init_telemetry};
///
/// init_telemetry(&TelemetryConfig::default(), LogWriter::Stdout)?;
/// ```
pub fn init_telemetry(config: &TelemetryConfig, writer: LogWriter) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.log_filter)?,
    };

    let (json_layer, text_layer) = match config.log_format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target)
                    .with_writer(writer.make_writer()),
            ),
            None,
        ),
        LogFormat::Text => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(config.with_target)
                    .with_ansi(writer == LogWriter::Stdout)
                    .with_writer(writer.make_writer()),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    tracing::debug!(format = ?config.log_format, ?writer, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.with_target);
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{"log_filter": "debug", "log_format": "json"}"#;
        let parsed: TelemetryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.log_filter, "debug");
        assert_eq!(parsed.log_format, LogFormat::Json);
        assert!(parsed.with_target);
    }

    #[test]
    fn test_with_filter() {
        let config = TelemetryConfig::with_filter("trace");
        assert_eq!(config.log_filter, "trace");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("skycast=debug,tower_http=info").is_ok());

        let err = parse_filter("skycast=loud").unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidFilter { ref filter, .. } if filter == "skycast=loud"));
    }

    #[test]
    fn test_second_init_fails() {
        let config = TelemetryConfig::with_filter("warn");
        // The first call may race with other tests; the second one never succeeds.
        let _ = init_telemetry(&config, LogWriter::Stderr);
        let second = init_telemetry(&config, LogWriter::Stderr);
        assert!(matches!(second, Err(TelemetryError::Init(_))));
    }
}
