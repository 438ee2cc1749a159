//! Technology and analytics detection.
//!
//! Detection is signature based: script URLs are matched against
//! `rules::SCRIPT_LIBRARIES`, the raw HTML against `rules::ANALYTICS_MARKERS`, and a
//! `<meta name="generator">` tag is reported as-is.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parse::rules::{ANALYTICS_MARKERS, SCRIPT_LIBRARIES};
use crate::utils::parse_selector_unsafe;

const SCRIPT_SRC_SELECTOR_STR: &str = "script[src]";
const META_GENERATOR_SELECTOR_STR: &str = "meta[name='generator']";

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(SCRIPT_SRC_SELECTOR_STR, "SCRIPT_SRC_SELECTOR"));
static META_GENERATOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_GENERATOR_SELECTOR_STR, "META_GENERATOR_SELECTOR")
});

/// Detects front-end libraries, analytics snippets and the site generator.
///
/// Each script contributes at most one library (the first matching rule). The
/// result is a set, so a library loaded by several scripts appears once.
pub fn detect_technologies(document: &Html, raw_html: &str) -> BTreeSet<String> {
    let mut technologies = BTreeSet::new();

    for script in document.select(&SCRIPT_SRC_SELECTOR) {
        let Some(src) = script.value().attr("src") else {
            continue;
        };
        let src = src.to_lowercase();
        if let Some((_, library)) = SCRIPT_LIBRARIES
            .iter()
            .find(|(marker, _)| src.contains(marker))
        {
            technologies.insert(library.to_string());
        }
    }

    for (marker, name) in ANALYTICS_MARKERS {
        if raw_html.contains(marker) {
            technologies.insert(name.to_string());
        }
    }

    if let Some(generator) = document
        .select(&META_GENERATOR_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::trim)
        .filter(|content| !content.is_empty())
    {
        technologies.insert(generator.to_string());
    }

    technologies
}
