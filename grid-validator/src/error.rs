//! Error types for grid file scanning.

use std::path::PathBuf;

use serde::Serialize;

/// The kind of scan-level failure that prevented a file from being validated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// The file could not be opened or read.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
}

/// A scan-level error: a file that could not be validated at all.
///
/// Distinct from a grid format violation, which means the file was read and
/// its content broke a rule. A `ScanError` still marks the file INVALID but
/// never stops the rest of the batch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description, including the path and system reason.
    pub message: String,
}

impl ScanError {
    #[must_use]
    pub fn new(file: PathBuf, kind: ScanErrorKind, message: String) -> Self {
        Self {
            file,
            kind,
            message,
        }
    }

    /// Format the error for log output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}
