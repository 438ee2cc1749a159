//! Marketing content extraction: value propositions, testimonials and pricing.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::{
    MAX_PLAN_FEATURES, MAX_PRICING_PLANS, MAX_TESTIMONIALS, MAX_TESTIMONIAL_CHARS,
    MAX_VALUE_PROPS, MIN_TESTIMONIAL_CHARS, TRUNCATION_MARKER, UNKNOWN_AUTHOR, VALUE_PROP_CHARS,
};
use crate::models::{Heading, PricingPlan, Testimonial};
use crate::parse::rules::{PRICING_KEYWORDS, PRICING_PLAN_SELECTORS, TESTIMONIAL_SELECTORS};
use crate::utils::{contains_any, element_text, parse_selector_unsafe, truncate_with_marker};

const PLAN_NAME_SELECTOR_STR: &str = "h1, h2, h3, h4, .plan-name";
const PLAN_PRICE_SELECTOR_STR: &str = ".price, .cost, .amount";
const PLAN_FEATURE_SELECTOR_STR: &str = "li, .feature";

static PLAN_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PLAN_NAME_SELECTOR_STR, "PLAN_NAME_SELECTOR"));
static PLAN_PRICE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PLAN_PRICE_SELECTOR_STR, "PLAN_PRICE_SELECTOR"));
static PLAN_FEATURE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PLAN_FEATURE_SELECTOR_STR, "PLAN_FEATURE_SELECTOR"));

/// Headings whose length makes them read as value statements.
pub fn extract_value_propositions(headings: &[Heading]) -> Vec<String> {
    headings
        .iter()
        .filter(|heading| VALUE_PROP_CHARS.contains(&heading.text.chars().count()))
        .take(MAX_VALUE_PROPS)
        .map(|heading| heading.text.clone())
        .collect()
}

/// Extracts customer quotes.
///
/// Texts of `MIN_TESTIMONIAL_CHARS` characters or fewer are skipped; longer ones are
/// truncated to `MAX_TESTIMONIAL_CHARS` plus a marker. The author is not parsed.
pub fn extract_testimonials(document: &Html) -> Vec<Testimonial> {
    let mut testimonials = Vec::new();
    for element in outermost_matches(document, &TESTIMONIAL_SELECTORS) {
        if testimonials.len() >= MAX_TESTIMONIALS {
            break;
        }
        let text = element_text(&element);
        if text.chars().count() <= MIN_TESTIMONIAL_CHARS {
            continue;
        }
        testimonials.push(Testimonial {
            text: truncate_with_marker(&text, MAX_TESTIMONIAL_CHARS, TRUNCATION_MARKER),
            author: UNKNOWN_AUTHOR.to_string(),
        });
    }
    testimonials
}

/// Whether the lower-cased page text mentions pricing.
pub fn mentions_pricing(lowered_text: &str) -> bool {
    contains_any(lowered_text, PRICING_KEYWORDS)
}

/// Extracts pricing plan cards.
///
/// Each card yields a name (first heading or `.plan-name`), a price (first `.price`,
/// `.cost` or `.amount`) and up to `MAX_PLAN_FEATURES` feature lines. Cards without a
/// price are dropped.
pub fn extract_pricing_plans(document: &Html) -> Vec<PricingPlan> {
    let mut plans = Vec::new();
    for card in outermost_matches(document, &PRICING_PLAN_SELECTORS) {
        if plans.len() >= MAX_PRICING_PLANS {
            break;
        }
        let price = first_text(&card, &PLAN_PRICE_SELECTOR);
        if price.is_empty() {
            continue;
        }
        let features = card
            .select(&PLAN_FEATURE_SELECTOR)
            .map(|feature| element_text(&feature))
            .filter(|text| !text.is_empty())
            .take(MAX_PLAN_FEATURES)
            .collect();
        plans.push(PricingPlan {
            name: first_text(&card, &PLAN_NAME_SELECTOR),
            price,
            features,
        });
    }
    plans
}

fn first_text(element: &ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|found| element_text(&found))
        .unwrap_or_default()
}

/// Elements matched by a selector table, in table order, each taken once.
///
/// An element nested inside one already taken is skipped, so a `.quote` inside a
/// `.testimonial` does not produce a second entry.
fn outermost_matches<'a>(document: &'a Html, selectors: &[Selector]) -> Vec<ElementRef<'a>> {
    let mut taken = HashSet::new();
    let mut matches = Vec::new();
    for selector in selectors {
        for element in document.select(selector) {
            if !taken.insert(element.id()) {
                continue;
            }
            if element
                .ancestors()
                .any(|ancestor| taken.contains(&ancestor.id()))
            {
                continue;
            }
            matches.push(element);
        }
    }
    matches
}
