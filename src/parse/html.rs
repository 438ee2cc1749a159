//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic document elements:
//! - Page title
//! - Meta description and keywords
//! - `h1`–`h3` headings
//! - Visible page text
//! - Mobile-friendliness detection

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::models::Heading;
use crate::parse::rules::{HEADING_SELECTOR, NON_CONTENT_ELEMENTS};
use crate::utils::{element_text, parse_selector_unsafe, resolve_href};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_KEYWORDS_SELECTOR_STR: &str = "meta[name='keywords']";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const META_VIEWPORT_SELECTOR_STR: &str = "meta[name='viewport']";
const BASE_SELECTOR_STR: &str = "base[href]";
const IMAGE_SELECTOR_STR: &str = "img";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_KEYWORDS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_KEYWORDS_SELECTOR_STR, "META_KEYWORDS_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static META_VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_VIEWPORT_SELECTOR_STR, "META_VIEWPORT_SELECTOR"));
static BASE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(BASE_SELECTOR_STR, "BASE_SELECTOR"));
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMAGE_SELECTOR_STR, "IMAGE_SELECTOR"));

/// Extracts the page title from an HTML document.
///
/// Returns the text of the first `<title>` element with whitespace collapsed, or an
/// empty string if there is none.
pub fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => element_text(&element),
        None => {
            log::debug!("No title element found in document");
            String::new()
        }
    }
}

/// Extracts the meta description, trimmed. Empty if the tag is missing.
pub fn extract_meta_description(document: &Html) -> String {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Extracts meta keywords from an HTML document.
///
/// Parses the comma-separated `content` of `<meta name="keywords">`, trimming each
/// keyword and dropping empty entries. Order is preserved.
pub fn extract_meta_keywords(document: &Html) -> Vec<String> {
    document
        .select(&META_KEYWORDS_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| {
            content
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Extracts non-empty `h1`, `h2` and `h3` headings in document order.
pub fn extract_headings(document: &Html) -> Vec<Heading> {
    document
        .select(&HEADING_SELECTOR)
        .filter_map(|element| {
            let level = element.value().name().get(1..)?.parse::<u8>().ok()?;
            let text = element_text(&element);
            (!text.is_empty()).then_some(Heading { level, text })
        })
        .collect()
}

/// Checks if an HTML document is mobile-friendly by looking for a viewport meta tag.
pub fn is_mobile_friendly(document: &Html) -> bool {
    document.select(&META_VIEWPORT_SELECTOR).next().is_some()
}

/// Number of `<img>` elements.
pub fn count_images(document: &Html) -> usize {
    document.select(&IMAGE_SELECTOR).count()
}

/// The URL relative links resolve against: the page URL, overridden by `<base href>`.
pub fn document_base(document: &Html, page_url: Option<&Url>) -> Option<Url> {
    let declared = document
        .select(&BASE_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| resolve_href(page_url, href));
    declared.or_else(|| page_url.cloned())
}

/// Visible text of the document with whitespace collapsed.
///
/// Text inside `script`, `style`, `noscript` and `template` is skipped so inline code
/// does not leak into contact and pricing detection.
pub fn page_text(document: &Html) -> String {
    let mut out = String::new();
    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| NON_CONTENT_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }
        for word in text.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}
