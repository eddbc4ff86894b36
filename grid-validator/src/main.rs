// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use grid_validator::{FsSourceConfig, output, validate_file};

const USAGE: &str = "Usage: format-checker file1 [file2 ... fileN]";

/// Check that grid files hold a row/column header followed by exactly that many rows of numbers.
#[derive(Parser, Debug)]
#[command(name = "format-checker", version, about)]
struct Cli {
    /// Grid files to validate, reported in the order given.
    /// Names starting with `-` are paths too.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

/// Diagnostics go to stderr at a fixed level so stdout carries only the report.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();
}

/// Returns whether every file was valid.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.files.is_empty() {
        writeln!(out, "{USAGE}")?;
        return Ok(true);
    }

    let fs_config = FsSourceConfig::for_paths(cli.files);
    let mut all_valid = true;
    for path in &fs_config.paths {
        let report = validate_file(path, &fs_config);
        all_valid &= report.is_valid();
        output::write_file_block(&report, &mut out)?;
    }
    out.flush()?;

    Ok(all_valid)
}
