//! Candidate index: progressive size → digest → byte filtering.
//!
//! # Overview
//!
//! Files are fed to [`CandidateIndex::observe`] one at a time, in traversal
//! order. The index remembers the first path seen for each size and, once
//! a size repeats, the first path seen for each content digest:
//!
//! 1. A size seen for the first time is simply remembered. No digest is
//!    computed, so files with a unique size never pay for hashing.
//! 2. On the second file of a size, the remembered path is promoted: its
//!    digest is computed once and stored. The new file is then digested.
//! 3. A digest seen for the first time is remembered. A repeated digest
//!    marks the new file as a duplicate of the path stored for it, after a
//!    byte-for-byte check in paranoid mode.
//!
//! The first path observed for a given content is always the original.
//!
//! # Example
//!
//! ```no_run
//! use dupes::duplicates::{CandidateIndex, Outcome};
//! use dupes::scanner::Hasher;
//! use std::path::Path;
//!
//! let mut index = CandidateIndex::new(Hasher::new(), false);
//! index.observe(Path::new("a.txt"), 5).unwrap();
//! match index.observe(Path::new("b.txt"), 5).unwrap() {
//!     Outcome::Duplicate(original) => println!("b.txt duplicates {}", original.display()),
//!     _ => println!("b.txt is unique so far"),
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::{files_identical, ContentDigest, Hash, HashAlgorithm, HashError};

/// Classification of a newly observed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// First of its kind so far; remembered for later comparisons.
    Recorded,
    /// Same content as the contained original path.
    Duplicate(PathBuf),
    /// Same digest as the contained path but different bytes (paranoid mode
    /// only). The new file is not recorded anywhere.
    HashCollision(PathBuf),
}

/// First path seen for a given size.
#[derive(Debug, Clone)]
struct SizeSlot {
    path: PathBuf,
    /// Whether `path` has had its digest computed and stored.
    promoted: bool,
}

/// Size and digest buckets for one detection run.
#[derive(Debug)]
pub struct CandidateIndex<D = crate::scanner::Hasher> {
    digester: D,
    paranoid: bool,
    sizes: HashMap<u64, SizeSlot>,
    digests: HashMap<Hash, PathBuf>,
    dropped: Option<HashError>,
}

impl<D: ContentDigest> CandidateIndex<D> {
    /// Create an empty index.
    ///
    /// # Arguments
    ///
    /// * `digester` - Source of content digests
    /// * `paranoid` - Confirm digest matches with a byte-by-byte comparison
    #[must_use]
    pub fn new(digester: D, paranoid: bool) -> Self {
        Self {
            digester,
            paranoid,
            sizes: HashMap::new(),
            digests: HashMap::new(),
            dropped: None,
        }
    }

    /// Classify a newly discovered file.
    ///
    /// A remembered file that can no longer be read is dropped from the
    /// index and the new file takes its place. The error is kept for
    /// [`CandidateIndex::take_dropped`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the new file cannot be digested or read. The
    /// new file is then not recorded anywhere; entries already committed for
    /// other files are left as they are.
    pub fn observe(&mut self, path: &Path, size: u64) -> Result<Outcome, HashError> {
        let Some(slot) = self.sizes.get(&size) else {
            return Ok(self.record_size(path, size));
        };

        if !slot.promoted {
            let first = slot.path.clone();
            match self.digester.digest(&first) {
                Ok(first_digest) => {
                    log::trace!("Promoting {} into digest stage", first.display());
                    self.digests.entry(first_digest).or_insert(first);
                    if let Some(slot) = self.sizes.get_mut(&size) {
                        slot.promoted = true;
                    }
                }
                Err(e) => {
                    log::debug!("Dropping unreadable {}", first.display());
                    self.dropped = Some(e);
                    return Ok(self.record_size(path, size));
                }
            }
        }

        let digest = self.digester.digest(path)?;

        let Some(original) = self.digests.get(&digest) else {
            self.digests.insert(digest, path.to_path_buf());
            return Ok(Outcome::Recorded);
        };
        let original = original.clone();

        if self.paranoid {
            match files_identical(path, &original) {
                Ok(true) => {}
                Ok(false) => {
                    log::debug!(
                        "{} collision between {} and {}",
                        self.digester.algorithm(),
                        path.display(),
                        original.display()
                    );
                    return Ok(Outcome::HashCollision(original));
                }
                Err(e) if e.path() == original.as_path() => {
                    log::debug!("Dropping unreadable {}", original.display());
                    self.dropped = Some(e);
                    self.digests.insert(digest, path.to_path_buf());
                    return Ok(Outcome::Recorded);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Outcome::Duplicate(original))
    }

    fn record_size(&mut self, path: &Path, size: u64) -> Outcome {
        self.sizes.insert(
            size,
            SizeSlot {
                path: path.to_path_buf(),
                promoted: false,
            },
        );
        log::trace!("New size {}: {}", size, path.display());
        Outcome::Recorded
    }

    /// Take the error for a remembered file dropped by the last
    /// [`CandidateIndex::observe`], if any.
    pub fn take_dropped(&mut self) -> Option<HashError> {
        self.dropped.take()
    }

    /// Whether any file has been remembered by size or digest.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty() && self.digests.is_empty()
    }

    /// Number of distinct sizes seen.
    #[must_use]
    pub fn size_count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of distinct digests stored.
    #[must_use]
    pub fn digest_count(&self) -> usize {
        self.digests.len()
    }

    /// Algorithm used for digests.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.digester.algorithm()
    }
}
