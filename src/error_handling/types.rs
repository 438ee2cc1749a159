//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Typed outcome of a failed fetch.
///
/// Every network failure is converted into one of these variants; callers decide
/// whether that means "candidate invalid", "feature absent" or an error marker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not complete within its timeout.
    #[error("Request timed out")]
    Timeout,

    /// DNS, TCP, TLS or protocol failure before a response arrived.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The server answered with a status outside 2xx/3xx.
    #[error("Non-success status: {0}")]
    NonSuccessStatus(u16),

    /// The response body could not be read or decoded.
    #[error("Failed to decode response body: {0}")]
    DecodeError(String),

    /// The URL could not be turned into a request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error types for writing reports.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error writing the output file or stream.
    #[error("Report write error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the report.
    #[error("Report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error types reported by external data collectors.
#[derive(Error, Debug)]
pub enum CollectorError {
    /// The collector has no data source for this company or platform.
    #[error("Collector unavailable: {0}")]
    Unavailable(String),

    /// The collector's own network call failed.
    #[error("Collector fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
