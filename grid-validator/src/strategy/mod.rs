//! Validation source strategies.
//!
//! Only the filesystem strategy (`fs` module) exists: the CLI hands over an
//! explicit, ordered list of file paths and each one is read in full before
//! its content reaches the grid checks.

pub mod fs;
