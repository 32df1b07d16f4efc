//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error_handling::ConfigValidationError;
use crate::map::TileLayerChoice;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration, parsed from the command line.
///
/// Can also be constructed programmatically (e.g., in tests) via
/// [`Config::default`] and field updates.
///
/// # Examples
///
/// ```no_run
/// use ip_status::Config;
///
/// let config = Config {
///     ip: Some("8.8.8.8".to_string()),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "ip_status", version, about = "Looks up geolocation data for an IP address (or your own) and drives a map view of the result.")]
pub struct Config {
    /// IP address to look up. Omit to look up your own IP.
    pub ip: Option<String>,

    /// Base URL of the geolocation API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// API token (falls back to the IPINFO_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// Tile layer to select for the map view
    #[arg(long, value_enum, default_value = "street")]
    pub tile_layer: TileLayerChoice,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
            tile_layer: TileLayerChoice::Street,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Validates the configuration, returning a descriptive error for the
    /// first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.api_base.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "api_base",
                message: "must not be empty".to_string(),
            });
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ConfigValidationError {
                field: "api_base",
                message: format!("must be an http(s) URL, got \"{}\"", self.api_base),
            });
        }
        Ok(())
    }
}
