//! Filesystem validation source.
//!
//! Each file is opened, read through a bounded `Read::take`, and closed when
//! the handle drops at the end of `read_file_bounded`, on every exit path.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ScanError, ScanErrorKind};

/// Result of attempting to read a file for validation.
pub enum ScanResult {
    /// File was read successfully; contains the UTF-8 content.
    Ok(String),
    /// File could not be read; contains the scan error.
    Err(ScanError),
}

/// Read one grid file as UTF-8, refusing anything over `max_file_size` bytes.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> ScanResult {
    match read_grid_text(path, max_file_size) {
        Ok(content) => ScanResult::Ok(content),
        Err(err) => ScanResult::Err(err),
    }
}

fn read_grid_text(path: &Path, max_file_size: u64) -> Result<String, ScanError> {
    let fail = |kind: ScanErrorKind, message: String| {
        ScanError::new(path.to_owned(), kind, message)
    };
    let io_error = |action: &str, e: &std::io::Error| {
        fail(
            ScanErrorKind::IoError,
            format!("failed to {action} {}: {e}", path.display()),
        )
    };

    let file = File::open(path).map_err(|e| io_error("open", &e))?;

    // One byte past the limit is enough to tell an oversized file apart.
    let mut bytes = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", &e))?;

    if bytes.len() as u64 > max_file_size {
        return Err(fail(
            ScanErrorKind::FileTooLarge,
            format!(
                "{} exceeds maximum size of {max_file_size} bytes",
                path.display()
            ),
        ));
    }

    String::from_utf8(bytes).map_err(|_| {
        fail(
            ScanErrorKind::InvalidEncoding,
            format!("{} is not valid UTF-8", path.display()),
        )
    })
}
