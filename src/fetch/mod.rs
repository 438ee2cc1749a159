//! HTTP fetching.
//!
//! This module provides the `Fetcher` abstraction the locator and analyzer use for
//! every network call, and `HttpFetcher`, its `reqwest` implementation.
//!
//! A fetch either yields a `FetchResponse` (status 2xx/3xx) or a typed `FetchError`;
//! network failures never escape as panics or untyped errors. Rate limiting is the
//! caller's job: the analyzer pauses between sequential page fetches.

mod request;
#[cfg(test)]
pub(crate) mod test_helpers;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::debug;

use crate::config::Config;
use crate::error_handling::{classify_reqwest_error, FetchError, InitializationError};
use crate::initialization::{init_client, init_probe_client};

pub(crate) use request::RequestHeaders;

/// HTTP method of a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMethod {
    /// Full page fetch; the body is read and redirects are followed.
    Get,
    /// Reachability probe; no body, redirects are reported rather than followed.
    Head,
}

/// A completed fetch.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status of the final response.
    pub status: u16,
    /// URL of the final response, after any followed redirects.
    pub final_url: String,
    /// Response body; `None` for HEAD requests.
    pub body: Option<String>,
    /// Wall-clock time from sending the request to reading the whole body.
    pub elapsed: Duration,
}

/// Issues HTTP requests on behalf of the locator and analyzer.
///
/// Implementations must bound every request by `timeout` and convert all failures
/// into `FetchError`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` with the given method and per-request timeout.
    async fn fetch(
        &self,
        url: &str,
        method: FetchMethod,
        timeout: Duration,
    ) -> Result<FetchResponse, FetchError>;
}

/// `reqwest`-backed fetcher.
///
/// GET requests go through a redirect-following client with browser-like headers;
/// HEAD requests go through a client with redirects disabled.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    probe_client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    /// Builds both clients from the configured User-Agent and timeouts.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if a client cannot be built
    /// (for example, a User-Agent that is not a valid header value).
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
            probe_client: init_probe_client(config)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        method: FetchMethod,
        timeout: Duration,
    ) -> Result<FetchResponse, FetchError> {
        let started = Instant::now();
        let builder = match method {
            FetchMethod::Get => RequestHeaders::apply_to_request_builder(self.client.get(url)),
            FetchMethod::Head => self.probe_client.head(url),
        };

        let response = builder
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !(status.is_success() || status.is_redirection()) {
            debug!("{:?} {} answered {}", method, url, status);
            return Err(FetchError::NonSuccessStatus(status.as_u16()));
        }

        let body = match method {
            FetchMethod::Get => Some(
                response
                    .text()
                    .await
                    .map_err(|e| classify_reqwest_error(&e))?,
            ),
            FetchMethod::Head => None,
        };

        let elapsed = started.elapsed();
        debug!(
            "{:?} {} -> {} ({} in {:.2}s)",
            method,
            url,
            final_url,
            status,
            elapsed.as_secs_f64()
        );

        Ok(FetchResponse {
            status: status.as_u16(),
            final_url,
            body,
            elapsed,
        })
    }
}
