//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DELAY_SECS, DEFAULT_MAX_PAGES, DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_SEARCH_ENDPOINT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::export::ExportFormat;

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

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use site_scout::Config;
///
/// let config = Config {
///     delay_seconds: 0.5,
///     max_pages: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Pause after each page fetch, in seconds
    pub delay_seconds: f64,

    /// Page (GET) request timeout in seconds
    pub timeout_seconds: u64,

    /// HEAD probe and search lookup timeout in seconds
    pub probe_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum number of auxiliary page kinds to probe
    pub max_pages: usize,

    /// Instant-answer search endpoint used as the discovery fallback
    pub search_endpoint: String,
}

impl Config {
    /// Inter-request delay as a `Duration`. Negative or non-finite values mean no delay.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_seconds).unwrap_or(Duration::ZERO)
    }

    /// Page fetch timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// HEAD probe / search timeout.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            delay_seconds: DEFAULT_DELAY_SECS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            probe_timeout_seconds: DEFAULT_PROBE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Analyze one company, print the report to stdout
/// site_scout "Acme"
///
/// # Several companies, slower crawl, report written to a file
/// site_scout Acme Globex --delay-seconds 2 --output reports.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "site_scout",
    about = "Finds a company's website and reports on its structure."
)]
pub struct Opt {
    /// Company names to analyze
    #[arg(required = true)]
    pub companies: Vec<String>,

    /// Write the reports here instead of stdout
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Report format: json|jsonl
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Pause after each page fetch, in seconds
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay_seconds: f64,

    /// Page request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HEAD probe and search timeout in seconds
    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT_SECS)]
    pub probe_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum auxiliary page kinds (pricing, blog, about) to probe
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Instant-answer search endpoint
    #[arg(long, default_value = DEFAULT_SEARCH_ENDPOINT)]
    pub search_endpoint: String,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            delay_seconds: opt.delay_seconds,
            timeout_seconds: opt.timeout_seconds,
            probe_timeout_seconds: opt.probe_timeout_seconds,
            user_agent: opt.user_agent.clone(),
            max_pages: opt.max_pages,
            search_endpoint: opt.search_endpoint.clone(),
        }
    }
}
