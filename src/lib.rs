//! site_scout library: website discovery and structural extraction
//!
//! This library finds a company's website from its name alone and turns it into a
//! structured `SiteReport`: page features (navigation, calls to action, pricing,
//! technologies, contact details, testimonials, links), auxiliary pricing, blog and
//! about pages, technical checks and a heuristic quality score.
//!
//! # Example
//!
//! ```no_run
//! use site_scout::{Config, SiteAnalyzer};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     delay_seconds: 0.5,
//!     max_pages: 3,
//!     ..Default::default()
//! };
//!
//! let analyzer = SiteAnalyzer::from_config(config)?;
//! let report = analyzer.analyze("Acme").await;
//! println!(
//!     "{}: {:?} scored {}",
//!     report.company, report.url, report.summary.quality_score
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analyzer;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod locate;
pub mod models;
pub mod parse;
pub mod social;
mod utils;

// Re-export public API
pub use analyzer::SiteAnalyzer;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{CollectorError, ExportError, FetchError, InitializationError};
pub use export::{write_reports, ExportFormat};
pub use fetch::{FetchMethod, FetchResponse, Fetcher, HttpFetcher};
pub use locate::SiteLocator;
pub use models::{PageFeatures, PageKind, SiteReport, Summary, TechnicalProfile};
pub use parse::extract_page;
pub use social::{analyze_competitor, CompetitorReport, PlatformData, SocialCollector};
