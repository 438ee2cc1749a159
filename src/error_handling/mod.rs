//! Error types and error categorization.
//!
//! This module provides:
//! - Typed errors for fetching, initialization, export and external collectors
//! - Classification of `reqwest` failures into `FetchError`
//!
//! Network failures never escape the analysis pipeline: they are converted into
//! `FetchError` values here and then into absent features or report error markers
//! by the callers.

mod categorization;
mod types;

// Re-export public API
pub use categorization::classify_reqwest_error;
pub use types::{CollectorError, ExportError, FetchError, InitializationError};
