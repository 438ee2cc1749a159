//! Call-to-action extraction and categorization.

use std::collections::HashSet;

use scraper::Html;
use url::Url;

use crate::config::{MAX_CTAS, MAX_CTA_TEXT_CHARS};
use crate::models::{CallToAction, CtaCategory};
use crate::parse::rules::{classify, CTA_CATEGORY_RULES, CTA_SELECTORS};
use crate::utils::{element_text, resolve_href};

/// Extracts call-to-action elements.
///
/// Selectors are evaluated in table order and an element matched by several of them
/// is taken once. Elements with empty or overlong text are skipped. Links are
/// resolved against `base`; elements without a resolvable `href` keep `url: None`.
pub fn extract_calls_to_action(document: &Html, base: Option<&Url>) -> Vec<CallToAction> {
    let mut seen = HashSet::new();
    let mut ctas = Vec::new();

    for selector in CTA_SELECTORS.iter() {
        for element in document.select(selector) {
            if ctas.len() >= MAX_CTAS {
                return ctas;
            }
            if !seen.insert(element.id()) {
                continue;
            }
            let text = element_text(&element);
            if text.is_empty() || text.chars().count() >= MAX_CTA_TEXT_CHARS {
                continue;
            }
            let url = element
                .value()
                .attr("href")
                .and_then(|href| resolve_href(base, href))
                .map(String::from);
            ctas.push(CallToAction {
                category: categorize_cta(&text),
                text,
                url,
            });
        }
    }
    ctas
}

/// Categorizes a CTA by its text. The first matching keyword rule wins.
pub fn categorize_cta(text: &str) -> CtaCategory {
    classify(&text.to_lowercase(), CTA_CATEGORY_RULES).unwrap_or(CtaCategory::Other)
}
