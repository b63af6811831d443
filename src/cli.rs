//! Command-line interface definitions for dupes.
//!
//! This module defines all CLI arguments using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Find duplicates in two trees
//! dupes ~/Pictures /mnt/backup/Pictures
//!
//! # Only JPEGs of at least 1 MiB, verified byte-by-byte
//! dupes -p -s 1MiB -g '*.jpg' ~/Pictures
//!
//! # Machine-readable output
//! dupes --output json ~/Downloads
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scanner::HashAlgorithm;

/// Find duplicate files by content.
///
/// Files are compared by size first, then by a content digest, and (with
/// -p) byte-by-byte. Each duplicate is listed under the first file seen
/// with the same content.
#[derive(Debug, Parser)]
#[command(name = "dupes")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "dupes [OPTIONS] <DIRECTORY>...")]
pub struct Cli {
    /// Directories to scan for duplicates
    #[arg(value_name = "DIRECTORY")]
    pub roots: Vec<PathBuf>,

    /// Paranoid byte-by-byte comparison of files with matching digests
    #[arg(short, long, overrides_with = "no_paranoid")]
    pub paranoid: bool,

    /// Trust digest matches, even if the config file enables paranoid mode
    #[arg(long, overrides_with = "paranoid")]
    pub no_paranoid: bool,

    /// Minimum size of files to consider [default: 1]
    ///
    /// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB, TB, TiB
    #[arg(short = 's', long, value_name = "SIZE", value_parser = parse_size)]
    pub min_size: Option<u64>,

    /// Glob expression for file names to consider [default: *]
    #[arg(short, long, value_name = "PATTERN")]
    pub glob: Option<String>,

    /// Digest algorithm [default: sha256]
    #[arg(short, long, value_enum)]
    pub algorithm: Option<HashAlgorithm>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Follow symbolic links during the walk
    ///
    /// Warning: the same file may then be reached through several paths
    /// and reported as its own duplicate.
    #[arg(long, overrides_with = "no_follow_symlinks")]
    pub follow_symlinks: bool,

    /// Do not follow symbolic links, even if the config file enables it
    #[arg(long, overrides_with = "follow_symlinks")]
    pub no_follow_symlinks: bool,

    /// Read settings from this TOML file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text: clusters followed by a summary line
    #[default]
    Text,
    /// JSON for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Parse a human-readable size string into bytes.
///
/// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB, TB, TiB
/// Case-insensitive. Numbers without suffix are treated as bytes.
///
/// # Examples
///
/// ```
/// use dupes::cli::parse_size;
///
/// assert_eq!(parse_size("1024").unwrap(), 1024);
/// assert_eq!(parse_size("1KB").unwrap(), 1000);
/// assert_eq!(parse_size("1KiB").unwrap(), 1024);
/// assert_eq!(parse_size("1MiB").unwrap(), 1_048_576);
/// ```
///
/// # Errors
///
/// Returns an error if the string is empty, contains an invalid number
/// or an unknown size suffix.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Size cannot be empty".to_string());
    }

    let (num_str, suffix) = match s.find(|c: char| !c.is_ascii_digit() && c != '.') {
        Some(idx) => (&s[..idx], s[idx..].trim().to_uppercase()),
        None => (s, String::new()),
    };

    if num_str.is_empty() {
        return Err(format!("Invalid number: '{s}'"));
    }

    let multiplier: u64 = match suffix.as_str() {
        "" | "B" => 1,
        "KB" | "K" => 1_000,
        "KIB" => 1_024,
        "MB" | "M" => 1_000_000,
        "MIB" => 1_048_576,
        "GB" | "G" => 1_000_000_000,
        "GIB" => 1_073_741_824,
        "TB" | "T" => 1_000_000_000_000,
        "TIB" => 1_099_511_627_776,
        _ => return Err(format!("Unknown size suffix: '{suffix}'")),
    };

    // Plain integers stay exact; fractions go through f64.
    if let Ok(whole) = num_str.parse::<u64>() {
        return whole
            .checked_mul(multiplier)
            .ok_or_else(|| format!("Size too large: '{s}'"));
    }

    let num: f64 = num_str
        .parse()
        .map_err(|_| format!("Invalid number: '{num_str}'"))?;

    let bytes = num * multiplier as f64;
    if !bytes.is_finite() || bytes > u64::MAX as f64 {
        return Err(format!("Size too large: '{s}'"));
    }
    Ok(bytes as u64)
}
