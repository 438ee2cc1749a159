//! Social data collection seam.
//!
//! Social profile data comes from a second source that this crate does not ship:
//! an implementation of `SocialCollector` (official API client, authorized
//! scraper, fixture) is plugged in by the caller. `analyze_competitor` runs it next
//! to the website analysis and keeps the two independent, so a collector failure
//! never changes the website report.

use std::collections::BTreeMap;

use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::analyzer::SiteAnalyzer;
use crate::error_handling::CollectorError;
use crate::models::SiteReport;

/// Audience figures for one platform. Fields a source cannot provide stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub url: Option<String>,
    pub followers: Option<u64>,
    pub posts_count: Option<u64>,
}

/// Social data collected for a company, keyed by platform name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformData {
    pub company: String,
    pub platforms: BTreeMap<String, PlatformProfile>,
}

impl PlatformData {
    /// Sum of the known follower counts.
    pub fn total_followers(&self) -> u64 {
        self.platforms
            .values()
            .filter_map(|profile| profile.followers)
            .sum()
    }

    /// The platform with the most followers, if any count is known.
    pub fn most_followed_platform(&self) -> Option<&str> {
        self.platforms
            .iter()
            .filter_map(|(name, profile)| profile.followers.map(|f| (name, f)))
            .max_by_key(|(_, followers)| *followers)
            .map(|(name, _)| name.as_str())
    }
}

/// A source of social profile data.
#[async_trait]
pub trait SocialCollector: Send + Sync {
    async fn collect(&self, company: &str) -> Result<PlatformData, CollectorError>;
}

/// Website report plus, when a collector is configured, social data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorReport {
    pub website: SiteReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<PlatformData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_error: Option<String>,
}

/// Analyzes a company's website and, concurrently, collects its social data.
pub async fn analyze_competitor(
    analyzer: &SiteAnalyzer,
    collector: Option<&dyn SocialCollector>,
    company: &str,
) -> CompetitorReport {
    let collect = async {
        match collector {
            Some(collector) => Some(collector.collect(company).await),
            None => None,
        }
    };
    let (website, collected) = tokio::join!(analyzer.analyze(company), collect);

    let (social, social_error) = match collected {
        Some(Ok(data)) => (Some(data), None),
        Some(Err(e)) => {
            warn!("Social collection for '{}' failed: {}", company, e);
            (None, Some(e.to_string()))
        }
        None => (None, None),
    };

    CompetitorReport {
        website,
        social,
        social_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::error_handling::FetchError;
    use crate::fetch::test_helpers::MockFetcher;

    struct FixedCollector;

    #[async_trait]
    impl SocialCollector for FixedCollector {
        async fn collect(&self, company: &str) -> Result<PlatformData, CollectorError> {
            let mut platforms = BTreeMap::new();
            platforms.insert(
                "LinkedIn".to_string(),
                PlatformProfile {
                    followers: Some(2340),
                    ..Default::default()
                },
            );
            platforms.insert(
                "Twitter".to_string(),
                PlatformProfile {
                    followers: Some(1250),
                    posts_count: Some(89),
                    ..Default::default()
                },
            );
            platforms.insert("GitHub".to_string(), PlatformProfile::default());
            Ok(PlatformData {
                company: company.to_string(),
                platforms,
            })
        }
    }

    struct BrokenCollector;

    #[async_trait]
    impl SocialCollector for BrokenCollector {
        async fn collect(&self, _company: &str) -> Result<PlatformData, CollectorError> {
            Err(FetchError::Timeout.into())
        }
    }

    fn analyzer() -> SiteAnalyzer {
        let fetcher = Arc::new(
            MockFetcher::new()
                .head("https://www.acme.com", 200)
                .get("https://www.acme.com", "<html><title>Acme</title></html>"),
        );
        let config = Config {
            delay_seconds: 0.0,
            max_pages: 0,
            ..Default::default()
        };
        SiteAnalyzer::new(fetcher, config)
    }

    #[test]
    fn test_platform_data_totals() {
        let data = PlatformData {
            company: "Acme".into(),
            platforms: BTreeMap::from([
                (
                    "LinkedIn".to_string(),
                    PlatformProfile {
                        followers: Some(2340),
                        ..Default::default()
                    },
                ),
                (
                    "Twitter".to_string(),
                    PlatformProfile {
                        followers: Some(1250),
                        ..Default::default()
                    },
                ),
                ("GitHub".to_string(), PlatformProfile::default()),
            ]),
        };
        assert_eq!(data.total_followers(), 3590);
        assert_eq!(data.most_followed_platform(), Some("LinkedIn"));
        assert_eq!(PlatformData::default().most_followed_platform(), None);
    }

    #[tokio::test]
    async fn test_competitor_report_combines_sources() {
        let report = analyze_competitor(&analyzer(), Some(&FixedCollector), "Acme").await;
        assert_eq!(report.website.main_page.title, "Acme");
        let social = report.social.expect("collector data");
        assert_eq!(social.company, "Acme");
        assert_eq!(social.total_followers(), 3590);
        assert!(report.social_error.is_none());
    }

    #[tokio::test]
    async fn test_collector_failure_leaves_website_report_intact() {
        let with_failure = analyze_competitor(&analyzer(), Some(&BrokenCollector), "Acme").await;
        let without = analyze_competitor(&analyzer(), None, "Acme").await;

        assert!(with_failure.social.is_none());
        assert_eq!(
            with_failure.social_error.as_deref(),
            Some("Collector fetch failed: Request timed out")
        );
        assert_eq!(with_failure.website.main_page, without.website.main_page);
        assert_eq!(with_failure.website.summary, without.website.summary);
        assert!(without.social.is_none());
        assert!(without.social_error.is_none());
    }
}
