//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_scout` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Running one analysis per company, concurrently
//! - Writing the reports
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use futures::future::join_all;

use site_scout::config::Opt;
use site_scout::initialization::init_logger_with;
use site_scout::{write_reports, Config, SiteAnalyzer};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let analyzer = SiteAnalyzer::from_config(config).context("Failed to build HTTP client")?;
    let reports = join_all(
        opt.companies
            .iter()
            .map(|company| analyzer.analyze(company)),
    )
    .await;

    let found = reports.iter().filter(|report| report.url.is_some()).count();
    let written = write_reports(&reports, opt.output.as_deref(), opt.format)
        .context("Failed to write reports")?;

    if let Some(path) = opt.output.as_ref() {
        println!(
            "Analyzed {} compan{} ({} website{} found); reports saved in {}",
            written,
            if written == 1 { "y" } else { "ies" },
            found,
            if found == 1 { "" } else { "s" },
            path.display()
        );
    }
    Ok(())
}
