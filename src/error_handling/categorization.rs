//! Error categorization.
//!
//! This module converts `reqwest` failures into typed `FetchError` values.

use super::types::FetchError;

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// Status errors are checked first, then the transport-level error kinds. Timeouts
/// are checked before body errors because a body read that exceeds the request
/// timeout reports both.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `FetchError`.
pub fn classify_reqwest_error(error: &reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::NonSuccessStatus(status.as_u16());
    }

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_builder() {
        FetchError::InvalidUrl(error.to_string())
    } else if error.is_body() || error.is_decode() {
        FetchError::DecodeError(error.to_string())
    } else {
        FetchError::ConnectionFailed(error.to_string())
    }
}
