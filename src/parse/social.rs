//! Social media link extraction.
//!
//! This module finds anchors pointing at the platforms listed in
//! `rules::SOCIAL_PLATFORMS` and records the platform and absolute URL of each.

use std::collections::HashSet;

use scraper::Html;
use url::Url;

use crate::models::SocialLink;
use crate::parse::rules::{ANCHOR_HREF_SELECTOR, SOCIAL_PLATFORMS};
use crate::utils::resolve_href;

/// Extracts social media links from an HTML document.
///
/// An anchor matches the first platform whose domain appears in its `href`. The
/// `href` is resolved against `base`, except a scheme-less href starting with the
/// platform domain (`twitter.com/acme`), which is read as `https://`. Unresolvable
/// links are skipped and repeated URLs are kept once, in document order.
pub fn extract_social_links(document: &Html, base: Option<&Url>) -> Vec<SocialLink> {
    let mut seen_urls = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&ANCHOR_HREF_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let lowered = href.to_lowercase();
        let Some((domain, platform)) = SOCIAL_PLATFORMS
            .iter()
            .find(|(domain, _)| lowered.contains(domain))
        else {
            continue;
        };
        let Some(url) = resolve_social_href(base, href, domain) else {
            continue;
        };
        let url = url.to_string();
        if seen_urls.insert(url.clone()) {
            links.push(SocialLink {
                platform: platform.to_string(),
                url,
            });
        }
    }

    links
}

fn resolve_social_href(base: Option<&Url>, href: &str, domain: &str) -> Option<Url> {
    let href = href.trim();
    let lowered = href.to_lowercase();
    let host_part = lowered.strip_prefix("www.").unwrap_or(&lowered);
    if host_part.starts_with(domain) {
        return Url::parse(&format!("https://{href}")).ok();
    }
    resolve_href(base, href)
}
