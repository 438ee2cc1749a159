//! Report data model.
//!
//! Everything the pipeline produces is a plain serde value: pages are extracted
//! into `PageFeatures`, the technical checks into `TechnicalProfile`, and the
//! analyzer assembles both into a `SiteReport`. Values are created once and never
//! mutated after they are returned.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A guessed website URL that has not been checked yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteCandidate {
    pub url: String,
}

/// A website URL confirmed reachable by a HEAD probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedSite {
    pub url: String,
}

/// A `h1`–`h3` heading in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Kind of action a call-to-action element solicits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CtaCategory {
    Signup,
    Trial,
    Contact,
    Pricing,
    Other,
}

/// A call-to-action element (button, CTA link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    /// Absolute target URL; `None` for elements without an `href` (e.g. `<button>`).
    pub url: Option<String>,
    pub category: CtaCategory,
}

/// A link to one of the company's social profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Contact details found in the page text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub contact_page: Option<String>,
}

/// A customer quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
}

/// A pricing plan card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

/// What a form is for, inferred from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormPurpose {
    Newsletter,
    Contact,
    Login,
    Unknown,
}

/// Shape of a `<form>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInfo {
    pub fields_count: usize,
    pub has_email_field: bool,
    pub purpose: FormPurpose,
}

/// Anchor counts by destination.
///
/// `total` counts every anchor with an `href`; `mailto:`, `tel:` and other
/// non-HTTP targets are neither internal nor external.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub internal: usize,
    pub external: usize,
    pub total: usize,
}

/// Structured features extracted from one HTML page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageFeatures {
    pub url: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub headings: Vec<Heading>,
    pub navigation: Vec<String>,
    pub calls_to_action: Vec<CallToAction>,
    pub social_links: Vec<SocialLink>,
    pub contact: ContactInfo,
    pub value_propositions: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub pricing_mentioned: bool,
    pub pricing_plans: Vec<PricingPlan>,
    pub technologies: BTreeSet<String>,
    pub forms: Vec<FormInfo>,
    pub images_count: usize,
    pub links: LinkStats,
    /// Set when the page could not be fetched; every other field is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageFeatures {
    /// An empty page carrying an error marker.
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Whether this page was fetched and extracted.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Auxiliary pages probed next to the main page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PageKind {
    Pricing,
    Blog,
    About,
}

/// Non-content signals about a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalProfile {
    pub https_enabled: bool,
    pub mobile_friendly: bool,
    /// Wall-clock duration of the main page fetch; `None` if it never completed.
    pub load_time_seconds: Option<f64>,
    pub has_sitemap: bool,
    /// Failures that degraded part of the report (e.g. an auxiliary page fetch).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Derived score and findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub quality_score: u8,
    pub key_findings: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Complete website report for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteReport {
    pub company: String,
    /// The located website; `None` when no site was found.
    pub url: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub main_page: PageFeatures,
    pub auxiliary_pages: BTreeMap<PageKind, Option<PageFeatures>>,
    pub technical: TechnicalProfile,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SiteReport {
    /// Report for a company whose website could not be located.
    pub fn not_found(company: impl Into<String>) -> Self {
        let company = company.into();
        Self {
            error: Some(format!("No website found for {company}")),
            company,
            url: None,
            timestamp: Utc::now(),
            main_page: PageFeatures::default(),
            auxiliary_pages: BTreeMap::new(),
            technical: TechnicalProfile::default(),
            summary: Summary::default(),
        }
    }

    /// The extracted auxiliary page of the given kind, if it was found.
    pub fn auxiliary(&self, kind: PageKind) -> Option<&PageFeatures> {
        self.auxiliary_pages.get(&kind).and_then(Option::as_ref)
    }
}
