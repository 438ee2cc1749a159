//! Extraction rule tables.
//!
//! Every heuristic the extractor applies is listed here as data: ordered selector
//! lists and keyword tables. Within a category the first matching rule wins, so the
//! order of each table is significant.

use std::sync::LazyLock;

use scraper::Selector;

use crate::models::{CtaCategory, FormPurpose};
use crate::utils::{parse_selector_unsafe, parse_selectors};

/// Navigation containers, most specific first. Only the first match is used.
pub const NAV_SELECTOR_STRS: &[&str] = &["nav", ".nav", ".navigation", ".menu", ".header-menu"];

/// Call-to-action elements, evaluated in order; an element is taken at most once.
pub const CTA_SELECTOR_STRS: &[&str] = &[
    ".btn",
    ".button",
    ".cta",
    "a[href*='signup']",
    "a[href*='trial']",
    "a[href*='demo']",
];

/// Customer quote containers.
pub const TESTIMONIAL_SELECTOR_STRS: &[&str] = &[".testimonial", ".review", ".quote"];

/// Pricing plan cards.
pub const PRICING_PLAN_SELECTOR_STRS: &[&str] = &[
    ".pricing-plan",
    ".price-card",
    ".plan",
    "[data-plan]",
    ".subscription",
];

/// CTA category keywords, in priority order.
pub const CTA_CATEGORY_RULES: &[(CtaCategory, &[&str])] = &[
    (CtaCategory::Signup, &["sign up", "signup", "register", "join"]),
    (CtaCategory::Trial, &["demo", "trial", "try"]),
    (CtaCategory::Contact, &["contact", "call"]),
    (CtaCategory::Pricing, &["pricing", "price"]),
];

/// Form purpose keywords, in priority order.
pub const FORM_PURPOSE_RULES: &[(FormPurpose, &[&str])] = &[
    (FormPurpose::Newsletter, &["newsletter", "subscribe"]),
    (FormPurpose::Contact, &["contact"]),
    (FormPurpose::Login, &["login", "log in", "signin", "sign in"]),
];

/// Social platform domains and display names. First match wins per link.
pub const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("twitter.com", "Twitter"),
    ("linkedin.com", "LinkedIn"),
    ("facebook.com", "Facebook"),
    ("instagram.com", "Instagram"),
    ("youtube.com", "YouTube"),
    ("github.com", "GitHub"),
];

/// Script `src` substrings and the library they identify. First match wins per script.
pub const SCRIPT_LIBRARIES: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("jquery", "jQuery"),
    ("bootstrap", "Bootstrap"),
];

/// Raw-HTML markers of analytics snippets.
pub const ANALYTICS_MARKERS: &[(&str, &str)] = &[
    ("gtag", "Google Analytics"),
    ("ga(", "Google Analytics"),
    ("googletagmanager.com/gtm.js", "Google Tag Manager"),
    ("fbq(", "Facebook Pixel"),
];

/// Lower-case page text containing any of these mentions pricing.
pub const PRICING_KEYWORDS: &[&str] = &["price", "pricing", "cost", "free", "trial", "$", "€"];

/// Keyword identifying a contact page link (href or text).
pub const CONTACT_KEYWORD: &str = "contact";

/// Elements whose text is not page content.
pub const NON_CONTENT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

// Regex patterns for contact details
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
pub const PHONE_PATTERN: &str = r"\+?\d{1,3}[-.\s]?\d{3,4}[-.\s]?\d{3,4}[-.\s]?\d{3,4}";

/// Returns the first rule whose keywords appear in `text` (already lower-cased).
pub fn classify<T: Copy>(text: &str, rules: &[(T, &[&str])]) -> Option<T> {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(value, _)| *value)
}

// Compiled selector tables
pub static NAV_SELECTORS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selectors(NAV_SELECTOR_STRS, "NAV_SELECTORS"));
pub static CTA_SELECTORS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selectors(CTA_SELECTOR_STRS, "CTA_SELECTORS"));
pub static TESTIMONIAL_SELECTORS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selectors(TESTIMONIAL_SELECTOR_STRS, "TESTIMONIAL_SELECTORS"));
pub static PRICING_PLAN_SELECTORS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| parse_selectors(PRICING_PLAN_SELECTOR_STRS, "PRICING_PLAN_SELECTORS"));

// Single selectors shared across rules
pub static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a", "ANCHOR_SELECTOR"));
pub static ANCHOR_HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_HREF_SELECTOR"));
pub static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1, h2, h3", "HEADING_SELECTOR"));
