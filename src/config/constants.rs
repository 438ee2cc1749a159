//! Configuration constants.
//!
//! This module defines the defaults used by `Config` and the fixed limits the page
//! extractor applies. The extraction caps are part of the report format: changing
//! them changes what downstream consumers see.

/// Default pause between sequential page fetches, in seconds.
pub const DEFAULT_DELAY_SECS: f64 = 1.0;

/// Default timeout for page GET requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default timeout for HEAD probes and the search lookup, in seconds.
///
/// Probes only need a status line, so they fail faster than page fetches.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Default maximum number of auxiliary page kinds (pricing, blog, about) to probe.
pub const DEFAULT_MAX_PAGES: usize = 5;

/// Default instant-answer search endpoint used when URL guessing fails.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.duckduckgo.com/";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Site discovery
/// HEAD statuses that mark a candidate website as reachable.
pub const ACCEPTED_PROBE_STATUSES: &[u16] = &[200, 301, 302];
/// Top-level domains tried when guessing a company website, in priority order.
pub const CANDIDATE_TLDS: &[&str] = &["com", "io"];
/// Domains that are never a company's own site (social networks, wikis, directories).
pub const BLOCKED_SITE_DOMAINS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
    "wikipedia.org",
    "crunchbase.com",
    "glassdoor.com",
];

// Extraction limits
/// Maximum navigation items kept per page.
pub const MAX_NAV_ITEMS: usize = 10;
/// Navigation texts must be shorter than this many characters.
pub const MAX_NAV_TEXT_CHARS: usize = 50;
/// Maximum calls to action kept per page.
pub const MAX_CTAS: usize = 10;
/// CTA texts must be shorter than this many characters.
pub const MAX_CTA_TEXT_CHARS: usize = 100;
/// Maximum unique email addresses kept per page.
pub const MAX_EMAILS: usize = 5;
/// Maximum unique phone numbers kept per page.
pub const MAX_PHONES: usize = 3;
/// Value propositions are headings with a length in this range (characters, inclusive).
pub const VALUE_PROP_CHARS: std::ops::RangeInclusive<usize> = 20..=200;
/// Maximum value propositions kept per page.
pub const MAX_VALUE_PROPS: usize = 5;
/// Testimonials must be longer than this many characters.
pub const MIN_TESTIMONIAL_CHARS: usize = 20;
/// Testimonial texts longer than this are truncated and suffixed with `TRUNCATION_MARKER`.
pub const MAX_TESTIMONIAL_CHARS: usize = 200;
/// Maximum testimonials kept per page.
pub const MAX_TESTIMONIALS: usize = 3;
/// Suffix appended to truncated text.
pub const TRUNCATION_MARKER: &str = "...";
/// Author recorded for testimonials (attribution is not extracted).
pub const UNKNOWN_AUTHOR: &str = "Unknown";
/// Maximum pricing plans kept per page.
pub const MAX_PRICING_PLANS: usize = 5;
/// Maximum features kept per pricing plan.
pub const MAX_PLAN_FEATURES: usize = 5;

// Quality scoring
/// Load times below this many seconds earn the fast-load points.
pub const FAST_LOAD_SECS: f64 = 3.0;
/// Load times above this many seconds are reported as a weakness.
pub const SLOW_LOAD_SECS: f64 = 5.0;
/// Sites with fewer calls to action get a recommendation to add more.
pub const MIN_RECOMMENDED_CTAS: usize = 2;
/// Upper bound of the quality score.
pub const MAX_QUALITY_SCORE: u32 = 100;

/// Path of the sitemap probed during technical checks.
pub const SITEMAP_PATH: &str = "/sitemap.xml";
