//! JSON output formatter for duplicate scan results.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "clusters": [
//!     {
//!       "original": "/photos/a.jpg",
//!       "duplicates": ["/backup/a.jpg"]
//!     }
//!   ],
//!   "summary": {
//!     "files_examined": 100,
//!     "duplicates_found": 1,
//!     "bytes_wasted": 51200,
//!     "collisions": 0,
//!     "warnings": 0,
//!     "algorithm": "sha256",
//!     "exit_code": 0,
//!     "exit_code_name": "DU000"
//!   }
//! }
//! ```

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::duplicates::{DuplicateCluster, ScanReport};
use crate::error::ExitCode;
use crate::scanner::HashAlgorithm;

/// A single cluster in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonCluster {
    /// First path observed with this content
    pub original: String,
    /// Later paths with the same content, in discovery order
    pub duplicates: Vec<String>,
}

impl JsonCluster {
    /// Convert a cluster, rendering paths lossily as UTF-8.
    #[must_use]
    pub fn from_cluster(cluster: &DuplicateCluster) -> Self {
        Self {
            original: path_string(&cluster.original),
            duplicates: cluster.duplicates.iter().map(|p| path_string(p)).collect(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Files that passed the filter
    pub files_examined: u64,
    /// Files reported as duplicates
    pub duplicates_found: u64,
    /// Total size of all duplicates in bytes
    pub bytes_wasted: u64,
    /// Hash collisions caught in paranoid mode
    pub collisions: usize,
    /// Entries skipped because of an error
    pub warnings: usize,
    /// Digest algorithm used
    pub algorithm: HashAlgorithm,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "DU000")
    pub exit_code_name: String,
}

impl JsonSummary {
    /// Create a JSON summary from a report and an exit code.
    #[must_use]
    pub fn from_report(report: &ScanReport, exit_code: ExitCode) -> Self {
        Self {
            files_examined: report.stats.files_examined,
            duplicates_found: report.stats.duplicates_found,
            bytes_wasted: report.stats.bytes_wasted,
            collisions: report.collisions,
            warnings: report.warnings,
            algorithm: report.algorithm,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Clusters sorted by original path
    pub clusters: Vec<JsonCluster>,
    /// Scan summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from a report and exit code.
    ///
    /// # Example
    ///
    /// ```
    /// use dupes::duplicates::ScanReport;
    /// use dupes::error::ExitCode;
    /// use dupes::output::json::JsonOutput;
    ///
    /// let output = JsonOutput::new(&ScanReport::default(), ExitCode::Success);
    /// assert!(output.clusters.is_empty());
    /// assert_eq!(output.summary.exit_code_name, "DU000");
    /// ```
    #[must_use]
    pub fn new(report: &ScanReport, exit_code: ExitCode) -> Self {
        Self {
            clusters: report.clusters.iter().map(JsonCluster::from_cluster).collect(),
            summary: JsonSummary::from_report(report, exit_code),
        }
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), JsonOutputError> {
        let json = self.to_json_pretty()?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
