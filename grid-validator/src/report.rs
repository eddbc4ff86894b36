//! Validation report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ScanError;

/// What happened to one file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
#[non_exhaustive]
pub enum FileVerdict {
    /// The content is a well-formed grid.
    Valid,
    /// The content was read and broke a grid rule.
    Invalid {
        /// The diagnostic for the first broken rule.
        reason: String,
    },
    /// The file could not be read.
    Unreadable(ScanError),
}

/// Verdict for a single file, tagged with its path as given.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileReport {
    pub file: PathBuf,
    pub verdict: FileVerdict,
}

impl FileReport {
    #[must_use]
    pub const fn new(file: PathBuf, verdict: FileVerdict) -> Self {
        Self { file, verdict }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.verdict, FileVerdict::Valid)
    }

    /// Diagnostic printed before `INVALID`; `None` for a valid file.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match &self.verdict {
            FileVerdict::Valid => None,
            FileVerdict::Invalid { reason } => Some(reason),
            FileVerdict::Unreadable(err) => Some(&err.message),
        }
    }
}

/// Result of a batch run.
///
/// `files` keeps the order the paths were given in.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of well-formed files.
    pub valid_files: usize,
    /// Number of files that were read but broke a grid rule.
    pub invalid_files: usize,
    /// Number of files that could not be read.
    pub unreadable_files: usize,
    /// Whether every file was valid.
    pub ok: bool,
    /// Per-file verdicts, in argument order.
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    /// Total number of files attempted.
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.files.len()
    }
}

impl FromIterator<FileReport> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        let files: Vec<FileReport> = iter.into_iter().collect();
        let mut valid_files = 0;
        let mut invalid_files = 0;
        let mut unreadable_files = 0;
        for report in &files {
            match report.verdict {
                FileVerdict::Valid => valid_files += 1,
                FileVerdict::Invalid { .. } => invalid_files += 1,
                FileVerdict::Unreadable(_) => unreadable_files += 1,
            }
        }

        Self {
            valid_files,
            invalid_files,
            unreadable_files,
            ok: invalid_files == 0 && unreadable_files == 0,
            files,
        }
    }
}
