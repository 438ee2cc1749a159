//! Report export.
//!
//! Reports are written as one pretty-printed JSON array (`Json`) or as JSON Lines,
//! one compact report per line (`Jsonl`), to a file or to stdout.

mod pipe;
mod writer;

use clap::ValueEnum;

pub use writer::write_reports;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One pretty-printed JSON array
    Json,
    /// One JSON object per line, for piping to `jq` or loading into other tools
    Jsonl,
}
