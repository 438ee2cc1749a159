//! HTTP request building.
//!
//! This module provides the browser-like headers sent with page fetches.

use reqwest::header::{HeaderName, ACCEPT, ACCEPT_LANGUAGE, UPGRADE_INSECURE_REQUESTS};

/// Browser request headers sent with page GETs.
///
/// Some sites serve a stripped or blocked page to clients that do not look like a
/// browser. `Accept-Encoding` is left to reqwest so the body is always decodable.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Header names and values, in the order they are applied.
    pub(crate) const BROWSER: [(HeaderName, &'static str); 3] = [
        (
            ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
        (ACCEPT_LANGUAGE, "en-US,en;q=0.9"),
        (UPGRADE_INSECURE_REQUESTS, "1"),
    ];

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        Self::BROWSER
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }
}
