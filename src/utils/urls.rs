//! URL resolution helpers.

use url::Url;

/// Resolves an `href` against the page URL.
///
/// Absolute hrefs (including `mailto:` and `tel:`) parse on their own; relative and
/// protocol-relative hrefs need `base`. Returns `None` when the href cannot be
/// resolved, so callers never store a relative URL.
pub fn resolve_href(base: Option<&Url>, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match base {
        Some(base) => base.join(href).ok(),
        None => Url::parse(href).ok(),
    }
}

/// Lower-cased host of an HTTP(S) URL.
pub fn host_of(url: &Url) -> Option<String> {
    match url.scheme() {
        "http" | "https" => url.host_str().map(str::to_ascii_lowercase),
        _ => None,
    }
}

/// Scheme, host and port of `url` joined with `path` (e.g. `https://acme.com/pricing`).
pub fn origin_url(url: &Url, path: &str) -> Option<String> {
    let mut origin = url.clone();
    origin.set_query(None);
    origin.set_fragment(None);
    origin.join(path).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.acme.com/products/index.html").unwrap()
    }

    #[test]
    fn test_resolve_relative_href() {
        let resolved = resolve_href(Some(&base()), "../pricing").unwrap();
        assert_eq!(resolved.as_str(), "https://www.acme.com/pricing");
    }

    #[test]
    fn test_resolve_protocol_relative_href() {
        let resolved = resolve_href(Some(&base()), "//cdn.example.net/app.js").unwrap();
        assert_eq!(host_of(&resolved).as_deref(), Some("cdn.example.net"));
    }

    #[test]
    fn test_resolve_without_base_requires_absolute() {
        assert!(resolve_href(None, "/about").is_none());
        assert!(resolve_href(None, "https://acme.com/about").is_some());
        assert!(resolve_href(None, "   ").is_none());
    }

    #[test]
    fn test_host_of_ignores_non_http_schemes() {
        let mail = Url::parse("mailto:hello@acme.com").unwrap();
        assert!(host_of(&mail).is_none());
        let upper = Url::parse("https://WWW.Acme.com/").unwrap();
        assert_eq!(host_of(&upper).as_deref(), Some("www.acme.com"));
    }

    #[test]
    fn test_origin_url_replaces_path() {
        let url = Url::parse("https://acme.com/home?ref=x#top").unwrap();
        assert_eq!(
            origin_url(&url, "/sitemap.xml").as_deref(),
            Some("https://acme.com/sitemap.xml")
        );
    }
}
