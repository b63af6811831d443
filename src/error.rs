//! Exit codes and configuration errors.

use serde::Serialize;

/// Exit codes for the dupes application.
///
/// - 0: Success (scan completed, whether or not duplicates were found)
/// - 1: General error (bad configuration, no roots, unexpected failure)
///
/// Warnings about individual files and hash collisions never change the
/// exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Scan completed.
    Success = 0,
    /// General error: Configuration was rejected or an unexpected error occurred.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DU000",
            Self::GeneralError => "DU001",
        }
    }
}

/// Errors detected before any scanning starts.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// No root directory was given on the command line.
    #[error("no directory given")]
    NoRoots,

    /// The `-g` pattern does not compile.
    #[error("invalid pattern for -g ({0})")]
    InvalidPattern(#[from] glob::PatternError),

    /// An explicitly requested configuration file does not exist.
    #[error("config file not found: {0}")]
    MissingFile(std::path::PathBuf),

    /// The merged configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Invalid(Box::new(error))
    }
}
