//! Instant-answer search fallback.
//!
//! The endpoint answers `GET ?q=...&format=json` with a JSON object. Only two fields
//! matter: `AbstractURL` (the direct answer) and `RelatedTopics[].FirstURL`. Related
//! topics may be grouped under a nested `Topics` array. Missing fields mean "no
//! answer", not an error.

use serde::Deserialize;
use url::Url;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InstantAnswer {
    #[serde(rename = "AbstractURL", default)]
    abstract_url: Option<String>,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Default, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "FirstURL", default)]
    first_url: Option<String>,
    #[serde(rename = "Topics", default)]
    topics: Vec<RelatedTopic>,
}

impl InstantAnswer {
    /// Result URLs in answer order: the abstract URL, then related topics depth-first.
    pub(crate) fn result_urls(&self) -> Vec<String> {
        let mut urls = Vec::new();
        push_non_empty(&mut urls, self.abstract_url.as_deref());
        collect_topic_urls(&self.related_topics, &mut urls);
        urls
    }
}

fn collect_topic_urls(topics: &[RelatedTopic], urls: &mut Vec<String>) {
    for topic in topics {
        push_non_empty(urls, topic.first_url.as_deref());
        collect_topic_urls(&topic.topics, urls);
    }
}

fn push_non_empty(urls: &mut Vec<String>, url: Option<&str>) {
    if let Some(url) = url.map(str::trim).filter(|url| !url.is_empty()) {
        urls.push(url.to_string());
    }
}

/// Builds the query URL for `"<company>" official website`.
pub(crate) fn search_url(endpoint: &str, company: &str) -> Result<Url, url::ParseError> {
    let query = format!("\"{}\" official website", company.trim());
    Url::parse_with_params(
        endpoint,
        &[
            ("q", query.as_str()),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ],
    )
}
