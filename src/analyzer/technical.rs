//! Technical checks that need no network access.

use url::Url;

use crate::config::SITEMAP_PATH;
use crate::utils::origin_url;

/// Whether `url` uses the `https` scheme.
pub fn is_https(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| parsed.scheme() == "https")
}

/// `{origin}/sitemap.xml` for the site at `site`.
pub fn sitemap_url(site: &Url) -> Option<String> {
    origin_url(site, SITEMAP_PATH)
}
