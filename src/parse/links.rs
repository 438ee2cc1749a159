//! Link classification.

use scraper::Html;
use url::Url;

use crate::models::LinkStats;
use crate::parse::rules::ANCHOR_HREF_SELECTOR;
use crate::utils::{host_of, resolve_href};

/// Counts anchors by destination.
///
/// Every anchor with an `href` counts toward `total`. The `href` is resolved
/// against `base` (the `<base href>` or the page URL); HTTP(S) targets on the host of
/// `page_url` (compared case-insensitively) are internal and other HTTP(S) targets are
/// external. `mailto:`, `tel:`, `javascript:` and unresolvable targets are neither.
pub fn analyze_links(
    document: &Html,
    page_url: Option<&Url>,
    base: Option<&Url>,
) -> LinkStats {
    let page_host = page_url.and_then(host_of);
    let mut stats = LinkStats::default();

    for anchor in document.select(&ANCHOR_HREF_SELECTOR) {
        stats.total += 1;
        let target_host = anchor
            .value()
            .attr("href")
            .and_then(|href| resolve_href(base, href))
            .and_then(|url| host_of(&url));
        match target_host {
            Some(host) if page_host.as_deref() == Some(host.as_str()) => stats.internal += 1,
            Some(_) => stats.external += 1,
            None => {}
        }
    }

    stats
}
