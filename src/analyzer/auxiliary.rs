//! Auxiliary page discovery table.

use url::Url;

use crate::models::PageKind;
use crate::utils::origin_url;

/// Paths probed for each auxiliary page kind, in probe order. Kinds are probed in
/// table order, up to `Config::max_pages` of them.
pub const AUXILIARY_PATHS: &[(PageKind, &[&str])] = &[
    (PageKind::Pricing, &["/pricing", "/plans", "/price"]),
    (PageKind::Blog, &["/blog", "/news", "/articles"]),
    (PageKind::About, &["/about", "/about-us", "/company"]),
];

/// The auxiliary kinds probed under a `max_pages` budget.
pub fn probed_kinds(max_pages: usize) -> impl Iterator<Item = &'static (PageKind, &'static [&'static str])> {
    AUXILIARY_PATHS.iter().take(max_pages)
}

/// Absolute candidate URLs for `paths` on the site's origin.
pub fn candidate_urls(site: &Url, paths: &[&str]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| origin_url(site, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_page_kind_has_paths() {
        for kind in PageKind::iter() {
            let paths = AUXILIARY_PATHS
                .iter()
                .find(|(listed, _)| *listed == kind)
                .map(|(_, paths)| *paths);
            assert!(
                paths.is_some_and(|paths| !paths.is_empty()),
                "{kind} has no paths"
            );
        }
        assert_eq!(AUXILIARY_PATHS.len(), PageKind::iter().count());
    }

    #[test]
    fn test_probed_kinds_respect_budget() {
        let kinds: Vec<PageKind> = probed_kinds(2).map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec![PageKind::Pricing, PageKind::Blog]);
        assert_eq!(probed_kinds(0).count(), 0);
        assert_eq!(probed_kinds(10).count(), 3);
    }

    #[test]
    fn test_candidate_urls_use_site_origin() {
        let site = Url::parse("https://www.acme.com/en/home?ref=ad").unwrap();
        assert_eq!(
            candidate_urls(&site, &["/pricing", "/plans"]),
            vec![
                "https://www.acme.com/pricing",
                "https://www.acme.com/plans",
            ]
        );
    }
}
