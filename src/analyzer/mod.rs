//! Site analysis orchestration.
//!
//! `SiteAnalyzer` drives one company through the pipeline:
//! locate → main page → auxiliary pages → technical checks → summary.
//!
//! Every step is a sequential await; the configured delay is slept after each page
//! GET. Failures never escape: a missing site, a failed main page or a failed
//! auxiliary page all degrade the `SiteReport` instead of returning an error.

mod auxiliary;
mod summary;
mod technical;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};
use scraper::Html;
use url::Url;

use crate::config::Config;
use crate::error_handling::{FetchError, InitializationError};
use crate::fetch::{FetchMethod, Fetcher, HttpFetcher};
use crate::locate::SiteLocator;
use crate::models::{PageFeatures, PageKind, SiteReport, TechnicalProfile};
use crate::parse;

pub use auxiliary::AUXILIARY_PATHS;
pub use summary::{quality_score, summarize};

/// A fetched and extracted page.
struct FetchedPage {
    features: PageFeatures,
    mobile_friendly: bool,
    final_url: String,
    elapsed: Duration,
}

/// Builds `SiteReport`s for companies.
///
/// The analyzer holds no per-company state, so one instance can run any number of
/// analyses concurrently.
///
/// # Examples
///
/// ```no_run
/// use site_scout::{Config, SiteAnalyzer};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let analyzer = SiteAnalyzer::from_config(Config::default())?;
/// let report = analyzer.analyze("Acme").await;
/// println!("{}: {}", report.company, report.summary.quality_score);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SiteAnalyzer {
    fetcher: Arc<dyn Fetcher>,
    locator: SiteLocator,
    config: Config,
}

impl SiteAnalyzer {
    /// Creates an analyzer that performs every request through `fetcher`.
    pub fn new(fetcher: Arc<dyn Fetcher>, config: Config) -> Self {
        Self {
            locator: SiteLocator::new(Arc::clone(&fetcher), &config),
            fetcher,
            config,
        }
    }

    /// Creates an analyzer backed by an `HttpFetcher`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP clients cannot be built.
    pub fn from_config(config: Config) -> Result<Self, InitializationError> {
        let fetcher = Arc::new(HttpFetcher::new(&config)?);
        Ok(Self::new(fetcher, config))
    }

    /// Locates the company's website and analyzes it.
    ///
    /// When no website is found the report carries an error and default contents.
    pub async fn analyze(&self, company: &str) -> SiteReport {
        match self.locator.locate(company).await {
            Some(site) => self.analyze_url(company, &site.url).await,
            None => {
                warn!("No website found for '{}'", company);
                SiteReport::not_found(company)
            }
        }
    }

    /// Analyzes the website at `url` without locating it first.
    pub async fn analyze_url(&self, company: &str, url: &str) -> SiteReport {
        info!("Analyzing '{}' at {}", company, url);
        let mut report = SiteReport {
            company: company.to_string(),
            url: Some(url.to_string()),
            timestamp: Utc::now(),
            main_page: PageFeatures::default(),
            auxiliary_pages: BTreeMap::new(),
            technical: TechnicalProfile::default(),
            summary: Default::default(),
            error: None,
        };

        match self.fetch_page(url).await {
            Ok(main) => {
                let mut technical = TechnicalProfile {
                    https_enabled: technical::is_https(&main.final_url),
                    mobile_friendly: main.mobile_friendly,
                    load_time_seconds: Some(main.elapsed.as_secs_f64()),
                    ..Default::default()
                };
                match Url::parse(&main.final_url) {
                    Ok(site) => {
                        let (pages, errors) = self.fetch_auxiliary_pages(&site).await;
                        report.auxiliary_pages = pages;
                        technical.errors = errors;
                        technical.has_sitemap = self.has_sitemap(&site).await;
                    }
                    Err(e) => {
                        warn!("Cannot probe around {}: {}", main.final_url, e);
                        technical.errors.push(format!("Invalid site URL: {e}"));
                    }
                }
                report.main_page = main.features;
                report.technical = technical;
            }
            Err(e) => {
                warn!("Main page {} for '{}' failed: {}", url, company, e);
                report.main_page = PageFeatures::failed(url, e.to_string());
                report.error = Some(format!("Main page fetch failed: {e}"));
            }
        }

        report.summary = summarize(
            &report.main_page,
            &report.auxiliary_pages,
            &report.technical,
        );
        info!(
            "Finished '{}': quality score {}",
            company, report.summary.quality_score
        );
        report
    }

    /// GETs and extracts one page, then sleeps the configured delay.
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let result = self
            .fetcher
            .fetch(url, FetchMethod::Get, self.config.timeout())
            .await;
        self.pause().await;
        let response = result?;

        let body = response.body.unwrap_or_default();
        let (features, mobile_friendly) = {
            let document = Html::parse_document(&body);
            (
                parse::extract_document(&response.final_url, &document, &body),
                parse::is_mobile_friendly(&document),
            )
        };

        Ok(FetchedPage {
            features,
            mobile_friendly,
            final_url: response.final_url,
            elapsed: response.elapsed,
        })
    }

    /// Probes the auxiliary path table and extracts the first hit per kind.
    ///
    /// Returns the page map (`None` for kinds with no hit or a failed fetch) and the
    /// errors of fetches that failed after a positive probe.
    async fn fetch_auxiliary_pages(
        &self,
        site: &Url,
    ) -> (BTreeMap<PageKind, Option<PageFeatures>>, Vec<String>) {
        let mut pages = BTreeMap::new();
        let mut errors = Vec::new();

        for (kind, paths) in auxiliary::probed_kinds(self.config.max_pages) {
            let mut page = None;
            for url in auxiliary::candidate_urls(site, paths) {
                if !self.exists(&url).await {
                    continue;
                }
                match self.fetch_page(&url).await {
                    Ok(fetched) => {
                        debug!("Found {} page at {}", kind, url);
                        page = Some(fetched.features);
                    }
                    Err(e) => {
                        warn!("{} page {} failed: {}", kind, url, e);
                        errors.push(format!("{kind} page {url}: {e}"));
                    }
                }
                break;
            }
            pages.insert(*kind, page);
        }

        (pages, errors)
    }

    async fn has_sitemap(&self, site: &Url) -> bool {
        match technical::sitemap_url(site) {
            Some(url) => self.exists(&url).await,
            None => false,
        }
    }

    /// HEAD-probes `url`; only a 200 counts as existing.
    async fn exists(&self, url: &str) -> bool {
        match self
            .fetcher
            .fetch(url, FetchMethod::Head, self.config.probe_timeout())
            .await
        {
            Ok(response) => response.status == 200,
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }

    async fn pause(&self) {
        let delay = self.config.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
