//! Contact detail extraction.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use url::Url;

use crate::config::{MAX_EMAILS, MAX_PHONES};
use crate::models::ContactInfo;
use crate::parse::rules::{ANCHOR_HREF_SELECTOR, CONTACT_KEYWORD, EMAIL_PATTERN, PHONE_PATTERN};
use crate::utils::{element_text, host_of, push_unique, resolve_href};

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(EMAIL_PATTERN, "EMAIL_RE"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(PHONE_PATTERN, "PHONE_RE"));

/// Extracts emails and phone numbers from the page text, and the contact page link.
///
/// `text` is the visible page text (see `page_text`). Matches are deduplicated in
/// order of appearance and capped at `MAX_EMAILS` and `MAX_PHONES`. The contact page
/// is the first HTTP(S) link whose `href` or text mentions "contact".
pub fn extract_contact_info(document: &Html, text: &str, base: Option<&Url>) -> ContactInfo {
    ContactInfo {
        emails: collect_matches(&EMAIL_RE, text, MAX_EMAILS),
        phones: collect_matches(&PHONE_RE, text, MAX_PHONES),
        contact_page: find_contact_page(document, base),
    }
}

fn collect_matches(re: &Regex, text: &str, limit: usize) -> Vec<String> {
    let mut found = Vec::new();
    for m in re.find_iter(text) {
        if found.len() >= limit {
            break;
        }
        push_unique(&mut found, m.as_str().trim().to_string());
    }
    found
}

fn find_contact_page(document: &Html, base: Option<&Url>) -> Option<String> {
    document.select(&ANCHOR_HREF_SELECTOR).find_map(|anchor| {
        let href = anchor.value().attr("href")?;
        let mentions_contact = href.to_lowercase().contains(CONTACT_KEYWORD)
            || element_text(&anchor).to_lowercase().contains(CONTACT_KEYWORD);
        if !mentions_contact {
            return None;
        }
        resolve_href(base, href)
            .filter(|url| host_of(url).is_some())
            .map(String::from)
    })
}
