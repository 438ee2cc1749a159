//! JSON and JSON Lines writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use super::pipe::IgnoreBrokenPipe;
use super::ExportFormat;
use crate::error_handling::ExportError;

/// Writes `reports` to `output` (stdout if `None`) in `format`.
///
/// # Returns
///
/// The number of reports written.
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be created or written, and
/// `ExportError::Serialize` if a report cannot be serialized.
pub fn write_reports<T: Serialize>(
    reports: &[T],
    output: Option<&Path>,
    format: ExportFormat,
) -> Result<usize, ExportError> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(IgnoreBrokenPipe::new(io::stdout().lock())),
    };

    write_to(&mut writer, reports, format)?;
    writer.flush()?;

    if let Some(path) = output {
        info!("Wrote {} report(s) to {}", reports.len(), path.display());
    }
    Ok(reports.len())
}

fn write_to<W: Write, T: Serialize>(
    writer: &mut W,
    reports: &[T],
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, reports)?;
            writeln!(writer)?;
        }
        ExportFormat::Jsonl => {
            for report in reports {
                serde_json::to_writer(&mut *writer, report)?;
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}
