//! Shared output formatting for validation reports.
//!
//! The plain-text format is one block per file:
//!
//! ```text
//! data/grid.dat
//! VALID
//!
//! data/broken.dat
//! expected 3 rows but found 2
//! INVALID
//!
//! ```
//!
//! The CLI writes one `write_file_block` per file as it goes. `write_human`
//! and `write_json` render a collected `ValidationReport` for library callers;
//! JSON output serializes the whole report.

use std::io::Write;

use crate::report::{FileReport, ValidationReport};

/// Line printed for a well-formed file.
pub const VALID_MARKER: &str = "VALID";

/// Line printed after the diagnostic of a rejected file.
pub const INVALID_MARKER: &str = "INVALID";

/// Write the block for a single file: path, verdict, blank separator.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_file_block(report: &FileReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "{}", report.file.display())?;
    match report.diagnostic() {
        None => writeln!(writer, "{VALID_MARKER}")?,
        Some(diagnostic) => {
            writeln!(writer, "{diagnostic}")?;
            writeln!(writer, "{INVALID_MARKER}")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

/// Format a `ValidationReport` as plain text, one block per file in order.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    for file in &report.files {
        write_file_block(file, writer)?;
    }
    Ok(())
}

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}
