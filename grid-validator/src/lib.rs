//! # grid-validator
//!
//! Batch validator for grid files: a header line with a row and a column
//! count, followed by exactly that many rows of space-separated numbers.
//!
//! The format rules live in the `grid-format` crate; this crate reads files
//! in the order given, turns every failure into a per-file verdict, and
//! formats the report. One bad or unreadable file never stops the batch.
//!
//! Two ways in:
//! - [`validate_file`] checks one path and returns its [`FileReport`]. The
//!   `format-checker` binary calls it per argument and prints each block with
//!   [`output::write_file_block`] as soon as the file is done.
//! - [`validate_files`] is for library callers that want the whole batch as a
//!   [`ValidationReport`] with counts, to render through
//!   [`output::write_human`] or [`output::write_json`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use grid_validator::{validate_files, FsSourceConfig};
//!
//! let config = FsSourceConfig::for_paths(vec![PathBuf::from("valid1.dat")]);
//!
//! let report = validate_files(&config).unwrap();
//! println!("Valid: {}", report.valid_files);
//! println!("Invalid: {}", report.invalid_files);
//! println!("Unreadable: {}", report.unreadable_files);
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
pub mod output;
mod report;
mod strategy;

use std::path::Path;

use grid_format::ValidationResult;
use tracing::{debug, warn};

pub use config::{DEFAULT_MAX_FILE_SIZE, FsSourceConfig};
pub use error::{ScanError, ScanErrorKind};
pub use report::{FileReport, FileVerdict, ValidationReport};

use strategy::fs::{ScanResult, read_file_bounded};

/// Validate every file in `fs_config.paths`, in order, and collect the report.
///
/// Library entry point; the CLI streams [`validate_file`] instead.
///
/// # Errors
///
/// Returns an error only if `fs_config.paths` is empty. Unreadable files and
/// malformed grids are reported per file in the returned report.
pub fn validate_files(fs_config: &FsSourceConfig) -> anyhow::Result<ValidationReport> {
    if fs_config.paths.is_empty() {
        anyhow::bail!("No paths provided for validation");
    }

    Ok(fs_config
        .paths
        .iter()
        .map(|path| validate_file(path, fs_config))
        .collect())
}

/// Read and validate a single grid file.
///
/// The file handle is held only while its content is read.
#[must_use]
pub fn validate_file(path: &Path, fs_config: &FsSourceConfig) -> FileReport {
    debug!(file = %path.display(), "validating grid file");

    let verdict = match read_file_bounded(path, fs_config.max_file_size) {
        ScanResult::Ok(content) => match grid_format::validate(&content) {
            ValidationResult::Valid => FileVerdict::Valid,
            ValidationResult::Invalid(err) => FileVerdict::Invalid {
                reason: err.to_string(),
            },
        },
        ScanResult::Err(scan_err) => {
            warn!("{}", scan_err.format_human_readable());
            FileVerdict::Unreadable(scan_err)
        }
    };

    let report = FileReport::new(path.to_path_buf(), verdict);
    debug!(file = %path.display(), valid = report.is_valid(), "grid file checked");
    report
}
