//! dupes - Duplicate File Finder
//!
//! Finds files with identical content across one or more directory trees.
//! Candidates are narrowed by size, then by a content digest, and in
//! paranoid mode confirmed byte-by-byte. Each duplicate is reported under
//! the first file seen with the same content.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, Write};

use anyhow::Context;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::duplicates::{DuplicateFinder, FinderConfig, LogObserver};
use crate::error::{ConfigError, ExitCode};
use crate::output::{CollisionPrinter, JsonOutput, TextOutput};
use crate::scanner::{FileFilter, WalkerConfig};

/// Run the application, writing the report to stdout.
///
/// # Errors
///
/// Returns an error for a rejected configuration (see [`ConfigError`]) or
/// if stdout cannot be written.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(&cli, &mut out)
}

/// Run the application, writing the report to `out`.
///
/// Configuration is validated before any directory is opened. With
/// `--print-config` the merged configuration is written instead of
/// scanning, and no root is required.
///
/// # Errors
///
/// Returns an error for a rejected configuration (see [`ConfigError`]) or
/// if `out` cannot be written.
pub fn run_with_output<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?.apply_cli(cli);
    log::debug!("Effective configuration: {:?}", config);

    if cli.print_config {
        let text = config.to_toml().context("Failed to render configuration")?;
        write!(out, "{text}").context("Failed to write configuration")?;
        out.flush().context("Failed to flush output")?;
        return Ok(ExitCode::Success);
    }

    if cli.roots.is_empty() {
        return Err(ConfigError::NoRoots.into());
    }

    let filter = FileFilter::new(config.min_size, &config.glob).map_err(ConfigError::from)?;
    let finder = DuplicateFinder::new(
        FinderConfig::default()
            .with_paranoid(config.paranoid)
            .with_algorithm(config.algorithm)
            .with_filter(filter)
            .with_walker_config(WalkerConfig {
                follow_symlinks: config.follow_symlinks,
            }),
    );

    match config.output {
        OutputFormat::Text => {
            let mut printer = CollisionPrinter::new(&mut *out);
            let report = finder.find_duplicates(&cli.roots, &mut printer);
            printer
                .finish()
                .context("Failed to write collision report")?;
            TextOutput::new(&report)
                .write_to(out)
                .context("Failed to write report")?;
        }
        OutputFormat::Json => {
            let report = finder.find_duplicates(&cli.roots, &mut LogObserver);
            JsonOutput::new(&report, ExitCode::Success)
                .write_to(out)
                .context("Failed to write JSON report")?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(ExitCode::Success)
}
