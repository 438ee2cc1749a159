//! HTML parsing and feature extraction.
//!
//! This module turns one HTML page into `PageFeatures`:
//! - Title, meta description and keywords, headings
//! - Navigation labels and calls to action
//! - Social media links and contact details
//! - Value propositions, testimonials and pricing
//! - Technologies, forms, image and link counts
//!
//! All parsing is done using CSS selectors via the `scraper` crate. The selectors
//! and keyword tables live in `rules`. Extraction is pure and never fails: missing
//! elements produce empty values, and malformed markup is parsed leniently.

mod contact;
mod content;
mod cta;
mod forms;
mod html;
mod links;
mod navigation;
pub(crate) mod rules;
mod social;
mod technology;

use scraper::Html;
use url::Url;

use crate::models::PageFeatures;

// Re-export public API
pub use contact::extract_contact_info;
pub use content::{
    extract_pricing_plans, extract_testimonials, extract_value_propositions, mentions_pricing,
};
pub use cta::{categorize_cta, extract_calls_to_action};
pub use forms::extract_forms;
pub use html::{
    count_images, document_base, extract_headings, extract_meta_description,
    extract_meta_keywords, extract_title, is_mobile_friendly, page_text,
};
pub use links::analyze_links;
pub use navigation::extract_navigation;
pub use social::extract_social_links;
pub use technology::detect_technologies;

/// Parses `html` and extracts the features of the page served at `url`.
///
/// Relative links resolve against `url` (or the document's `<base href>`). If `url`
/// does not parse, relative links are left unresolved and only absolute ones count.
pub fn extract_page(url: &str, html: &str) -> PageFeatures {
    let document = Html::parse_document(html);
    extract_document(url, &document, html)
}

/// Extracts features from an already parsed document.
///
/// `raw_html` is the source `document` was parsed from; analytics snippets are
/// detected in it rather than in the tree.
pub fn extract_document(url: &str, document: &Html, raw_html: &str) -> PageFeatures {
    let page_url = match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Cannot resolve links on '{}': {}", url, e);
            None
        }
    };
    let base = document_base(document, page_url.as_ref());
    let base = base.as_ref();

    let text = page_text(document);
    let headings = extract_headings(document);

    PageFeatures {
        url: url.to_string(),
        title: extract_title(document),
        description: extract_meta_description(document),
        keywords: extract_meta_keywords(document),
        value_propositions: extract_value_propositions(&headings),
        headings,
        navigation: extract_navigation(document),
        calls_to_action: extract_calls_to_action(document, base),
        social_links: extract_social_links(document, base),
        contact: extract_contact_info(document, &text, base),
        testimonials: extract_testimonials(document),
        pricing_mentioned: mentions_pricing(&text.to_lowercase()),
        pricing_plans: extract_pricing_plans(document),
        technologies: detect_technologies(document, raw_html),
        forms: extract_forms(document),
        images_count: count_images(document),
        links: analyze_links(document, page_url.as_ref(), base),
        error: None,
    }
}
