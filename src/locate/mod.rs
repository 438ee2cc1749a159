//! Website discovery.
//!
//! `SiteLocator` turns a company name into a reachable website URL:
//! 1. Probe guessed URLs (`www.{name}.com`, `{name}.com`, `www.{name}.io`,
//!    `{name}.io`) with HEAD; the first answering 200, 301 or 302 wins.
//! 2. Otherwise ask the instant-answer search endpoint, drop results on blocklisted
//!    domains or whose host does not contain the name, and HEAD-validate the first
//!    survivor.
//!
//! Network failures only ever reject a candidate. Not finding a site is a normal
//! outcome (`None`), not an error.

mod candidates;
mod search;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::{Config, ACCEPTED_PROBE_STATUSES};
use crate::fetch::{FetchMethod, Fetcher};
use crate::models::ValidatedSite;

pub use candidates::{candidate_urls, is_plausible_company_url, normalize_company_name};
use search::{search_url, InstantAnswer};

/// Finds a company's website from its name.
#[derive(Clone)]
pub struct SiteLocator {
    fetcher: Arc<dyn Fetcher>,
    probe_timeout: Duration,
    search_endpoint: String,
}

impl SiteLocator {
    /// Creates a locator that issues its probes and search query through `fetcher`.
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &Config) -> Self {
        Self {
            fetcher,
            probe_timeout: config.probe_timeout(),
            search_endpoint: config.search_endpoint.clone(),
        }
    }

    /// Locates the website of `company`.
    ///
    /// Returns `None` when neither a guessed URL nor a search result validates.
    pub async fn locate(&self, company: &str) -> Option<ValidatedSite> {
        let Some(normalized) = normalize_company_name(company) else {
            warn!("Cannot locate a website for an empty company name");
            return None;
        };

        for candidate in candidate_urls(&normalized) {
            if self.probe(&candidate.url).await {
                info!("Found website for '{}': {}", company, candidate.url);
                return Some(ValidatedSite { url: candidate.url });
            }
        }

        debug!(
            "No guessed URL answered for '{}', falling back to search",
            company
        );
        let found = self.search(company, &normalized).await?;
        if self.probe(&found).await {
            info!("Found website for '{}' via search: {}", company, found);
            Some(ValidatedSite { url: found })
        } else {
            debug!("Search result {} for '{}' did not validate", found, company);
            None
        }
    }

    /// HEAD-probes `url`; any failure means "not reachable".
    async fn probe(&self, url: &str) -> bool {
        match self
            .fetcher
            .fetch(url, FetchMethod::Head, self.probe_timeout)
            .await
        {
            Ok(response) => ACCEPTED_PROBE_STATUSES.contains(&response.status),
            Err(e) => {
                debug!("Probe of {} failed: {}", url, e);
                false
            }
        }
    }

    /// First plausible company URL from the instant-answer endpoint.
    async fn search(&self, company: &str, normalized: &str) -> Option<String> {
        let url = match search_url(&self.search_endpoint, company) {
            Ok(url) => url,
            Err(e) => {
                warn!(
                    "Invalid search endpoint '{}': {}",
                    self.search_endpoint, e
                );
                return None;
            }
        };

        let response = match self
            .fetcher
            .fetch(url.as_str(), FetchMethod::Get, self.probe_timeout)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Website search for '{}' failed: {}", company, e);
                return None;
            }
        };

        let answer: InstantAnswer = match serde_json::from_str(response.body.as_deref()?) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Unreadable search answer for '{}': {}", company, e);
                return None;
            }
        };

        let found = answer
            .result_urls()
            .into_iter()
            .find(|candidate| is_plausible_company_url(candidate, normalized));
        if found.is_none() {
            debug!("Search returned no plausible site for '{}'", company);
        }
        found
    }
}
