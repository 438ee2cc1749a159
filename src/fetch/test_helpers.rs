//! Shared test helpers for code that fetches through the `Fetcher` trait.
//!
//! `MockFetcher` answers from a scripted route table and records every call, so
//! tests can assert which requests were (or were not) issued.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error_handling::FetchError;
use crate::fetch::{FetchMethod, FetchResponse, Fetcher};

enum UrlMatch {
    Exact(String),
    Prefix(String),
}

impl UrlMatch {
    fn matches(&self, url: &str) -> bool {
        match self {
            UrlMatch::Exact(expected) => expected == url,
            UrlMatch::Prefix(prefix) => url.starts_with(prefix.as_str()),
        }
    }
}

struct Route {
    method: FetchMethod,
    url: UrlMatch,
    reply: Result<FetchResponse, FetchError>,
}

/// Scripted `Fetcher`. Unrouted requests fail with `ConnectionFailed`.
#[derive(Default)]
pub struct MockFetcher {
    routes: Vec<Route>,
    calls: Mutex<Vec<(FetchMethod, String)>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// HEAD `url` answers `status`.
    pub fn head(mut self, url: &str, status: u16) -> Self {
        self.routes.push(Route {
            method: FetchMethod::Head,
            url: UrlMatch::Exact(url.to_string()),
            reply: Ok(response(url, status, None)),
        });
        self
    }

    /// GET `url` answers 200 with `body`.
    pub fn get(self, url: &str, body: &str) -> Self {
        self.get_timed(url, body, Duration::from_millis(100))
    }

    /// GET `url` answers 200 with `body` after `elapsed`.
    pub fn get_timed(mut self, url: &str, body: &str, elapsed: Duration) -> Self {
        let mut reply = response(url, 200, Some(body.to_string()));
        reply.elapsed = elapsed;
        self.routes.push(Route {
            method: FetchMethod::Get,
            url: UrlMatch::Exact(url.to_string()),
            reply: Ok(reply),
        });
        self
    }

    /// GET on any URL starting with `prefix` answers 200 with `body`.
    pub fn get_prefix(mut self, prefix: &str, body: &str) -> Self {
        self.routes.push(Route {
            method: FetchMethod::Get,
            url: UrlMatch::Prefix(prefix.to_string()),
            reply: Ok(response(prefix, 200, Some(body.to_string()))),
        });
        self
    }

    /// `method` on `url` fails with `error`.
    pub fn fail(mut self, method: FetchMethod, url: &str, error: FetchError) -> Self {
        self.routes.push(Route {
            method,
            url: UrlMatch::Exact(url.to_string()),
            reply: Err(error),
        });
        self
    }

    /// Every request issued so far, in order.
    pub fn calls(&self) -> Vec<(FetchMethod, String)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    /// Number of requests with `method` whose URL starts with `prefix`.
    pub fn count(&self, method: FetchMethod, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|(m, url)| *m == method && url.starts_with(prefix))
            .count()
    }
}

fn response(url: &str, status: u16, body: Option<String>) -> FetchResponse {
    FetchResponse {
        status,
        final_url: url.to_string(),
        body,
        elapsed: Duration::from_millis(100),
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(
        &self,
        url: &str,
        method: FetchMethod,
        _timeout: Duration,
    ) -> Result<FetchResponse, FetchError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((method, url.to_string()));

        self.routes
            .iter()
            .find(|route| route.method == method && route.url.matches(url))
            .map(|route| route.reply.clone())
            .unwrap_or_else(|| Err(FetchError::ConnectionFailed(format!("no route for {url}"))))
    }
}
