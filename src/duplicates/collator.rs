//! Duplicate collation and run statistics.
//!
//! # Overview
//!
//! [`DuplicateCollator`] gathers confirmed duplicates into clusters keyed by
//! their original (first observed) path. Clusters keep duplicates in
//! discovery order; [`DuplicateCollator::finalize`] sorts the clusters by
//! original path so output does not depend on hash map iteration order.
//!
//! # Example
//!
//! ```
//! use dupes::duplicates::{DuplicateCollator, RunStatistics};
//! use std::path::Path;
//!
//! let mut stats = RunStatistics::default();
//! let mut collator = DuplicateCollator::new();
//! collator.record(Path::new("/b"), Path::new("/b2"), 10, &mut stats);
//! collator.record(Path::new("/a"), Path::new("/a2"), 5, &mut stats);
//! collator.record(Path::new("/a"), Path::new("/a3"), 5, &mut stats);
//!
//! assert_eq!(stats.duplicates_found, 3);
//! assert_eq!(stats.bytes_wasted, 20);
//!
//! let clusters = collator.finalize();
//! assert_eq!(clusters[0].original, Path::new("/a"));
//! assert_eq!(clusters[0].duplicates.len(), 2);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Counters for one detection run. They only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    /// Regular files that passed the filters and entered the index
    pub files_examined: u64,
    /// Files reported as a duplicate of an earlier file
    pub duplicates_found: u64,
    /// Sum of the sizes of all duplicates (originals excluded)
    pub bytes_wasted: u64,
}

/// An original path and every later path found to have the same content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateCluster {
    /// First observed path with this content
    pub original: PathBuf,
    /// Later paths with the same content, in discovery order
    pub duplicates: Vec<PathBuf>,
}

impl DuplicateCluster {
    /// All paths of the cluster, original first.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.original.as_path()).chain(self.duplicates.iter().map(PathBuf::as_path))
    }
}

/// Accumulates duplicates per original path.
#[derive(Debug, Default)]
pub struct DuplicateCollator {
    clusters: HashMap<PathBuf, Vec<PathBuf>>,
}

impl DuplicateCollator {
    /// Create an empty collator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `duplicate` to the cluster of `original` and count it.
    ///
    /// `size` is the duplicate's size in bytes; it is added to
    /// `bytes_wasted` right away.
    pub fn record(
        &mut self,
        original: &Path,
        duplicate: &Path,
        size: u64,
        stats: &mut RunStatistics,
    ) {
        log::debug!("{} duplicates {}", duplicate.display(), original.display());
        self.clusters
            .entry(original.to_path_buf())
            .or_default()
            .push(duplicate.to_path_buf());
        stats.duplicates_found += 1;
        stats.bytes_wasted += size;
    }

    /// Consume the collator, returning clusters sorted by original path.
    ///
    /// Paths are ordered by their raw string bytes, which gives the same
    /// order as sorting the printed paths.
    #[must_use]
    pub fn finalize(self) -> Vec<DuplicateCluster> {
        let mut clusters: Vec<DuplicateCluster> = self
            .clusters
            .into_iter()
            .map(|(original, duplicates)| DuplicateCluster {
                original,
                duplicates,
            })
            .collect();
        clusters.sort_by(|a, b| a.original.as_os_str().cmp(b.original.as_os_str()));
        clusters
    }
}
