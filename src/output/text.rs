//! Plain-text report.
//!
//! Each cluster is printed as its original path, then one line per
//! duplicate, then a blank line. A summary line follows:
//!
//! ```text
//! /photos/a.jpg
//! /backup/a.jpg
//!
//! 1,234 files examined, 1 duplicates found, 2.50 MB wasted
//! ```
//!
//! The summary is left out when no file was indexed at all.

use std::io::{self, Write};
use std::path::Path;

use crate::duplicates::{ScanObserver, ScanReport};
use crate::scanner::{HashAlgorithm, ScanError};

const SIZE_UNITS: [&str; 9] = ["bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with a binary unit and two decimals.
///
/// The value is divided by 1024 while it is strictly greater than 1024,
/// so exactly 1024 bytes stays "1024.00 bytes".
///
/// ```
/// use dupes::output::text::format_size;
///
/// assert_eq!(format_size(1), "1.00 bytes");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value > 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

/// Format a count with commas as thousands separators.
///
/// ```
/// use dupes::output::text::format_count;
///
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The line announcing a paranoid-mode hash collision.
#[must_use]
pub fn collision_line(path: &Path, original: &Path, algorithm: HashAlgorithm) -> String {
    format!(
        "cool: {} {}-collides with {}!",
        path.display(),
        algorithm,
        original.display()
    )
}

/// Text rendering of a finished scan.
#[derive(Debug)]
pub struct TextOutput<'a> {
    report: &'a ScanReport,
}

impl<'a> TextOutput<'a> {
    /// Create a new text output for a report.
    #[must_use]
    pub fn new(report: &'a ScanReport) -> Self {
        Self { report }
    }

    /// The summary line, or `None` if nothing was indexed.
    #[must_use]
    pub fn summary_line(&self) -> Option<String> {
        if !self.report.indexed {
            return None;
        }
        let stats = &self.report.stats;
        Some(format!(
            "{} files examined, {} duplicates found, {} wasted",
            format_count(stats.files_examined),
            format_count(stats.duplicates_found),
            format_size(stats.bytes_wasted)
        ))
    }

    /// Write clusters and summary.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for cluster in &self.report.clusters {
            for path in cluster.paths() {
                writeln!(writer, "{}", path.display())?;
            }
            writeln!(writer)?;
        }
        if let Some(summary) = self.summary_line() {
            writeln!(writer, "{summary}")?;
        }
        Ok(())
    }
}

/// Observer printing collisions to the report stream as they happen.
///
/// Warnings go to the logger. A write failure is kept and returned by
/// [`CollisionPrinter::finish`].
pub struct CollisionPrinter<'a, W: Write> {
    writer: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> CollisionPrinter<'a, W> {
    /// Print collisions to `writer`.
    pub fn new(writer: &'a mut W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Return the first write error, if any.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from a failed collision line.
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> ScanObserver for CollisionPrinter<'_, W> {
    fn on_collision(&mut self, path: &Path, original: &Path, algorithm: HashAlgorithm) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}", collision_line(path, original, algorithm)) {
            self.error = Some(e);
        }
    }

    fn on_warning(&mut self, error: &ScanError) {
        log::warn!("{}", error);
    }
}
