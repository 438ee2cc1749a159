//! Quality score and findings.
//!
//! Both are pure functions of the extracted pages and the technical profile. Each
//! finding rule is checked independently and appends to its list in a fixed order.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{FAST_LOAD_SECS, MAX_QUALITY_SCORE, MIN_RECOMMENDED_CTAS, SLOW_LOAD_SECS};
use crate::models::{PageFeatures, PageKind, Summary, TechnicalProfile};

/// Number of technologies named in the key findings.
const LISTED_TECHNOLOGIES: usize = 3;

type AuxiliaryPages = BTreeMap<PageKind, Option<PageFeatures>>;

fn found(pages: &AuxiliaryPages, kind: PageKind) -> Option<&PageFeatures> {
    pages.get(&kind).and_then(Option::as_ref)
}

fn is_fast(technical: &TechnicalProfile) -> bool {
    technical
        .load_time_seconds
        .is_some_and(|secs| secs < FAST_LOAD_SECS)
}

fn is_slow(technical: &TechnicalProfile) -> bool {
    technical
        .load_time_seconds
        .is_some_and(|secs| secs > SLOW_LOAD_SECS)
}

/// Heuristic website maturity score in `0..=100`.
///
/// | Signal                   | Points |
/// |--------------------------|--------|
/// | title present            | 10     |
/// | description present      | 10     |
/// | any heading              | 10     |
/// | any call to action       | 15     |
/// | any social link          | 5      |
/// | HTTPS                    | 10     |
/// | mobile-friendly          | 15     |
/// | load time under 3s       | 15     |
/// | pricing page found       | 10     |
pub fn quality_score(
    main: &PageFeatures,
    auxiliary: &AuxiliaryPages,
    technical: &TechnicalProfile,
) -> u8 {
    let signals: [(bool, u32); 9] = [
        (!main.title.is_empty(), 10),
        (!main.description.is_empty(), 10),
        (!main.headings.is_empty(), 10),
        (!main.calls_to_action.is_empty(), 15),
        (!main.social_links.is_empty(), 5),
        (technical.https_enabled, 10),
        (technical.mobile_friendly, 15),
        (is_fast(technical), 15),
        (found(auxiliary, PageKind::Pricing).is_some(), 10),
    ];
    let score: u32 = signals
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum();
    // Clamped to MAX_QUALITY_SCORE, so the conversion cannot fail
    u8::try_from(score.min(MAX_QUALITY_SCORE)).unwrap_or(u8::MAX)
}

/// Builds the report summary.
pub fn summarize(
    main: &PageFeatures,
    auxiliary: &AuxiliaryPages,
    technical: &TechnicalProfile,
) -> Summary {
    let mut summary = Summary {
        quality_score: quality_score(main, auxiliary, technical),
        ..Default::default()
    };

    // Key findings
    if !main.calls_to_action.is_empty() {
        summary.key_findings.push(format!(
            "Found {} calls to action",
            main.calls_to_action.len()
        ));
    }
    if !main.technologies.is_empty() {
        let listed: Vec<&str> = main
            .technologies
            .iter()
            .take(LISTED_TECHNOLOGIES)
            .map(String::as_str)
            .collect();
        summary
            .key_findings
            .push(format!("Technologies used: {}", listed.join(", ")));
    }
    if let Some(pricing) = found(auxiliary, PageKind::Pricing) {
        if !pricing.pricing_plans.is_empty() {
            summary.key_findings.push(format!(
                "Found {} pricing plans",
                pricing.pricing_plans.len()
            ));
        }
    }

    // Strengths
    if technical.https_enabled {
        summary.strengths.push("HTTPS enabled".to_string());
    }
    if technical.mobile_friendly {
        summary.strengths.push("Mobile-friendly layout".to_string());
    }
    if !main.social_links.is_empty() {
        let platforms: BTreeSet<&str> = main
            .social_links
            .iter()
            .map(|link| link.platform.as_str())
            .collect();
        summary.strengths.push(format!(
            "Present on {} social networks",
            platforms.len()
        ));
    }

    // Weaknesses
    if main.description.is_empty() {
        summary
            .weaknesses
            .push("Missing meta description".to_string());
    }
    if !technical.has_sitemap {
        summary.weaknesses.push("No sitemap.xml".to_string());
    }
    if is_slow(technical) {
        summary.weaknesses.push("Slow page load".to_string());
    }

    // Recommendations
    if main.description.is_empty() {
        summary
            .recommendations
            .push("Add a meta description to improve SEO".to_string());
    }
    if main.calls_to_action.len() < MIN_RECOMMENDED_CTAS {
        summary
            .recommendations
            .push("Add more calls to action".to_string());
    }
    if found(auxiliary, PageKind::Blog).is_none() {
        summary
            .recommendations
            .push("Start a blog for content marketing".to_string());
    }

    summary
}
