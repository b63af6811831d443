//! Duplicate finder: traversal driver for the detection pipeline.
//!
//! # Overview
//!
//! [`DuplicateFinder`] walks each root path, filters the discovered entries
//! and feeds qualifying files, one at a time, into a [`DetectionSession`]:
//!
//! 1. **Filter** - skip non-regular files, files below the minimum size and
//!    files whose name does not match the glob
//! 2. **Index** - classify the file by size, then digest, then (paranoid
//!    mode) bytes, see [`crate::duplicates::index`]
//! 3. **Collate** - record confirmed duplicates under their original
//!
//! Errors on individual entries never stop the walk. They are passed to the
//! [`ScanObserver`] and counted in the final [`ScanReport`].
//!
//! # Example
//!
//! ```no_run
//! use dupes::duplicates::{DuplicateFinder, FinderConfig, LogObserver};
//! use std::path::PathBuf;
//!
//! let finder = DuplicateFinder::new(FinderConfig::default().with_paranoid(true));
//! let report = finder.find_duplicates(&[PathBuf::from(".")], &mut LogObserver);
//!
//! for cluster in &report.clusters {
//!     println!("{} has {} copies", cluster.original.display(), cluster.duplicates.len());
//! }
//! ```

use std::path::{Path, PathBuf};

use super::collator::{DuplicateCluster, DuplicateCollator, RunStatistics};
use super::index::{CandidateIndex, Outcome};
use crate::scanner::{
    ContentDigest, FileEntry, FileFilter, HashAlgorithm, HashError, Hasher, ScanError, Walker,
    WalkerConfig,
};

/// Receiver for events the display layer cares about during a scan.
///
/// Both methods default to doing nothing.
pub trait ScanObserver {
    /// Two files share a digest but differ byte-for-byte (paranoid mode).
    ///
    /// # Arguments
    ///
    /// * `path` - The file just observed
    /// * `original` - The earlier file holding the same digest
    /// * `algorithm` - The digest algorithm that collided
    fn on_collision(&mut self, _path: &Path, _original: &Path, _algorithm: HashAlgorithm) {}

    /// A non-fatal error on one entry; the scan continues.
    fn on_warning(&mut self, _error: &ScanError) {}
}

/// Observer that sends every event to the logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_collision(&mut self, path: &Path, original: &Path, algorithm: HashAlgorithm) {
        log::warn!(
            "{} {}-collides with {}",
            path.display(),
            algorithm,
            original.display()
        );
    }

    fn on_warning(&mut self, error: &ScanError) {
        log::warn!("{}", error);
    }
}

/// Result of a completed scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Duplicate clusters sorted by original path
    pub clusters: Vec<DuplicateCluster>,
    /// Counters for the run
    pub stats: RunStatistics,
    /// Whether any file was remembered by size or digest
    pub indexed: bool,
    /// Number of hash collisions detected in paranoid mode
    pub collisions: usize,
    /// Number of entries skipped because of an error
    pub warnings: usize,
    /// Digest algorithm used
    pub algorithm: HashAlgorithm,
}

/// State of one detection run: filter, buckets, clusters and counters.
///
/// A fresh session is created for every run.
#[derive(Debug)]
pub struct DetectionSession<D = Hasher> {
    filter: FileFilter,
    index: CandidateIndex<D>,
    collator: DuplicateCollator,
    stats: RunStatistics,
    collisions: usize,
    warnings: usize,
}

impl DetectionSession<Hasher> {
    /// Create a session hashing with `algorithm`.
    #[must_use]
    pub fn new(filter: FileFilter, algorithm: HashAlgorithm, paranoid: bool) -> Self {
        Self::with_digester(filter, Hasher::with_algorithm(algorithm), paranoid)
    }
}

impl<D: ContentDigest> DetectionSession<D> {
    /// Create a session with a custom digest source.
    #[must_use]
    pub fn with_digester(filter: FileFilter, digester: D, paranoid: bool) -> Self {
        Self {
            filter,
            index: CandidateIndex::new(digester, paranoid),
            collator: DuplicateCollator::new(),
            stats: RunStatistics::default(),
            collisions: 0,
            warnings: 0,
        }
    }

    /// Run one discovered entry through the pipeline.
    ///
    /// Returns `Ok(None)` if the entry was filtered out, otherwise the
    /// index's classification. Duplicates are recorded before returning.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file could not be read. The file is
    /// counted as examined but is not recorded anywhere. A remembered file
    /// that fails instead is dropped and reported by [`Self::process`].
    pub fn observe(&mut self, entry: &FileEntry) -> Result<Option<Outcome>, HashError> {
        if !entry.is_regular || !self.filter.accepts(entry) {
            return Ok(None);
        }

        self.stats.files_examined += 1;

        let outcome = self.index.observe(&entry.path, entry.size)?;
        if let Outcome::Duplicate(original) = &outcome {
            self.collator
                .record(original, &entry.path, entry.size, &mut self.stats);
        }
        Ok(Some(outcome))
    }

    /// Handle one item from a walk, reporting anything unusual to `observer`.
    pub fn process(
        &mut self,
        item: Result<FileEntry, ScanError>,
        observer: &mut dyn ScanObserver,
    ) {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                self.warn(observer, &e);
                return;
            }
        };

        let result = self.observe(&entry);
        if let Some(dropped) = self.index.take_dropped() {
            self.warn(observer, &ScanError::from(dropped));
        }

        match result {
            Ok(Some(Outcome::HashCollision(original))) => {
                self.collisions += 1;
                observer.on_collision(&entry.path, &original, self.index.algorithm());
            }
            Ok(_) => {}
            Err(e) => self.warn(observer, &ScanError::from(e)),
        }
    }

    fn warn(&mut self, observer: &mut dyn ScanObserver, error: &ScanError) {
        self.warnings += 1;
        observer.on_warning(error);
    }

    /// Counters so far.
    #[must_use]
    pub fn stats(&self) -> RunStatistics {
        self.stats
    }

    /// Close the session and produce the sorted report.
    #[must_use]
    pub fn finish(self) -> ScanReport {
        ScanReport {
            indexed: !self.index.is_empty(),
            algorithm: self.index.algorithm(),
            clusters: self.collator.finalize(),
            stats: self.stats,
            collisions: self.collisions,
            warnings: self.warnings,
        }
    }
}

/// Configuration for the duplicate finder.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Confirm digest matches byte-by-byte (paranoid mode).
    pub paranoid: bool,
    /// Digest algorithm.
    pub algorithm: HashAlgorithm,
    /// Size and name filter.
    pub filter: FileFilter,
    /// Walker configuration for directory traversal.
    pub walker_config: WalkerConfig,
}

impl FinderConfig {
    /// Enable paranoid mode (byte-by-byte verification).
    #[must_use]
    pub fn with_paranoid(mut self, enabled: bool) -> Self {
        self.paranoid = enabled;
        self
    }

    /// Set the digest algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the file filter.
    #[must_use]
    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }
}

/// Duplicate finder that walks root paths and runs the detection pipeline.
#[derive(Debug, Clone, Default)]
pub struct DuplicateFinder {
    config: FinderConfig,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    fn session(&self) -> DetectionSession {
        DetectionSession::new(
            self.config.filter.clone(),
            self.config.algorithm,
            self.config.paranoid,
        )
    }

    /// Find duplicates across all `roots`, in the order given.
    ///
    /// A root that cannot be opened is reported to `observer` and skipped;
    /// the remaining roots are still scanned.
    pub fn find_duplicates(&self, roots: &[PathBuf], observer: &mut dyn ScanObserver) -> ScanReport {
        let mut session = self.session();

        for root in roots {
            log::info!("Scanning {}", root.display());
            let walker = Walker::new(root, self.config.walker_config.clone());
            for item in walker.walk() {
                session.process(item, observer);
            }
        }

        let report = session.finish();
        log::info!(
            "Scan complete: {} files examined, {} duplicates in {} clusters, {} warnings",
            report.stats.files_examined,
            report.stats.duplicates_found,
            report.clusters.len(),
            report.warnings
        );
        report
    }

    /// Run the pipeline over already discovered entries, skipping the walk.
    pub fn find_duplicates_from_files<I>(&self, files: I, observer: &mut dyn ScanObserver) -> ScanReport
    where
        I: IntoIterator<Item = FileEntry>,
    {
        let mut session = self.session();
        for file in files {
            session.process(Ok(file), observer);
        }
        session.finish()
    }
}
