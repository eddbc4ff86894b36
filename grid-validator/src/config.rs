//! Configuration types for grid validation.
//!
//! Files come from an explicit path list; there is no config file and no
//! environment lookup. The CLI fills these from its positional arguments.

use std::path::PathBuf;

/// Default cap on the size of a single file (64 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 67_108_864;

/// Filesystem source options.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Files to validate, in reporting order. Required, must be non-empty.
    pub paths: Vec<PathBuf>,
    /// Maximum file size in bytes (default: 64 MiB).
    /// Larger files are reported as unreadable instead of being loaded.
    pub max_file_size: u64,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl FsSourceConfig {
    /// Config for the given paths with default limits.
    #[must_use]
    pub fn for_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            ..Self::default()
        }
    }
}
