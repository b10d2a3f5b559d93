use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::{FileFinding, ScanError};

/// Printed when the aggregated report is empty.
pub fn print_clean_message<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No unused imports detected");
    writeln!(writer, "{}", "No unused imports found.".green())?;
    writer.flush()?;
    Ok(())
}

/// Human-readable report: a header line, then one line per file in
/// discovery order, `path: entry, entry, ...` with entries exactly as
/// written in the source.
pub fn print_report<W: Write>(writer: &mut W, findings: &[FileFinding]) -> io::Result<()> {
    debug!("Printing report for {} files", findings.len());
    writeln!(writer, "{}", "Found unused imports in the following files:".yellow())?;
    for finding in findings {
        writeln!(writer, "{}: {}", finding.path.blue(), finding.unused.join(", "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Machine-readable variant: an array of `{path, unused}` objects in the
/// same order as the human report.
pub fn print_report_json<W: Write>(writer: &mut W, findings: &[FileFinding]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, findings)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// One line per failed file, in discovery order. Callers pass stderr.
pub fn print_scan_errors<W: Write>(writer: &mut W, errors: &[ScanError]) -> io::Result<()> {
    for error in errors {
        writeln!(writer, "Error scanning {}: {}", error.path, error.message)?;
    }
    writer.flush()?;
    Ok(())
}
