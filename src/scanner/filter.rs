//! Size and filename filters applied to discovered files.

use glob::{MatchOptions, Pattern, PatternError};

use super::FileEntry;

/// Glob that matches every filename; no pattern test is performed for it.
pub const MATCH_ALL: &str = "*";

/// Predicate deciding whether a regular file takes part in detection.
///
/// Files smaller than `min_size` are rejected, as are files whose final path
/// component does not match the glob pattern. The pattern is compiled once,
/// so an invalid pattern is reported before any traversal starts.
#[derive(Debug, Clone)]
pub struct FileFilter {
    min_size: u64,
    pattern: Option<Pattern>,
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            min_size: 1,
            pattern: None,
        }
    }
}

impl FileFilter {
    /// Build a filter from a minimum size and a glob pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if `glob` is not a valid pattern.
    pub fn new(min_size: u64, glob: &str) -> Result<Self, PatternError> {
        let pattern = if glob == MATCH_ALL {
            None
        } else {
            Some(Pattern::new(glob)?)
        };
        Ok(Self { min_size, pattern })
    }

    /// Minimum size in bytes.
    #[must_use]
    pub fn min_size(&self) -> u64 {
        self.min_size
    }

    /// Check whether the entry passes both the size and the name filter.
    #[must_use]
    pub fn accepts(&self, entry: &FileEntry) -> bool {
        if entry.size < self.min_size {
            log::trace!(
                "Skipping file below minimum size ({} < {}): {}",
                entry.size,
                self.min_size,
                entry.path.display()
            );
            return false;
        }

        let Some(pattern) = &self.pattern else {
            return true;
        };

        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        // Wildcards must not cross a separator, as with shell globbing.
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        if pattern.matches_with(&name, options) {
            true
        } else {
            log::trace!("Skipping file not matching glob: {}", entry.path.display());
            false
        }
    }
}
