//! Candidate URL generation and filtering.

use url::Url;

use crate::config::{BLOCKED_SITE_DOMAINS, CANDIDATE_TLDS};
use crate::models::SiteCandidate;
use crate::utils::host_of;

const HOST_PREFIXES: &[&str] = &["www.", ""];

/// Lower-cases a company name and strips all whitespace (`"Acme Corp"` → `"acmecorp"`).
///
/// Returns `None` for names that are empty after normalization.
pub fn normalize_company_name(company: &str) -> Option<String> {
    let normalized: String = company
        .split_whitespace()
        .collect::<String>()
        .to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

/// Guessed website URLs for a normalized name, in probe order.
///
/// `www.` before bare host, `.com` before `.io`. Guesses that do not form a valid
/// URL are left out.
pub fn candidate_urls(normalized: &str) -> Vec<SiteCandidate> {
    CANDIDATE_TLDS
        .iter()
        .flat_map(|tld| {
            HOST_PREFIXES
                .iter()
                .map(move |prefix| format!("https://{prefix}{normalized}.{tld}"))
        })
        .filter(|url| Url::parse(url).is_ok())
        .map(|url| SiteCandidate { url })
        .collect()
}

/// Whether a search result looks like the company's own site.
///
/// Rejects blocklisted domains (social networks, wikis, directories) and hosts that
/// do not contain the normalized company name.
pub fn is_plausible_company_url(url: &str, normalized: &str) -> bool {
    let Some(host) = Url::parse(url).ok().as_ref().and_then(host_of) else {
        return false;
    };
    if BLOCKED_SITE_DOMAINS
        .iter()
        .any(|blocked| host.contains(blocked))
    {
        return false;
    }
    host.contains(normalized)
}
