//! Streaming file hasher.
//!
//! # Overview
//!
//! [`Hasher`] computes a content digest for a file by streaming its bytes
//! through a cryptographic hash. SHA-256 is the default; BLAKE3 can be
//! selected with [`HashAlgorithm::Blake3`]. Both produce 32-byte digests,
//! so [`Hash`] is the same type regardless of algorithm.
//!
//! A fresh hash state is created for every call; no hasher instance is
//! shared between files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::HashError;

/// A 32-byte content digest.
pub type Hash = [u8; 32];

/// Read buffer size for streaming file content through the hash.
const HASH_BUFFER_SIZE: usize = 64 * 1024;

/// Hash algorithm used for content digests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256
    #[default]
    Sha256,
    /// BLAKE3
    Blake3,
}

impl HashAlgorithm {
    /// Short lowercase name, as used in collision reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Blake3 => "blake3",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of content digests for the candidate index.
///
/// [`Hasher`] is the production implementation; tests substitute their own
/// to force specific digests.
pub trait ContentDigest {
    /// Compute the digest of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    fn digest(&self, path: &Path) -> Result<Hash, HashError>;

    /// The algorithm backing this digest.
    fn algorithm(&self) -> HashAlgorithm;
}

/// File hasher with configurable algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher {
    algorithm: HashAlgorithm,
}

impl Hasher {
    /// Create a SHA-256 hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher for the given algorithm.
    #[must_use]
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Hash the entire content of a file.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::NotFound`] or [`HashError::PermissionDenied`] if
    /// the file cannot be opened, [`HashError::Io`] if a read fails midway.
    pub fn full_hash(&self, path: &Path) -> Result<Hash, HashError> {
        let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        let reader = BufReader::with_capacity(HASH_BUFFER_SIZE, file);

        let hash = match self.algorithm {
            HashAlgorithm::Sha256 => {
                let mut state = Sha256::new();
                stream_into(reader, path, |chunk| state.update(chunk))?;
                state.finalize().into()
            }
            HashAlgorithm::Blake3 => {
                let mut state = blake3::Hasher::new();
                stream_into(reader, path, |chunk| {
                    state.update(chunk);
                })?;
                *state.finalize().as_bytes()
            }
        };

        log::trace!(
            "{} {} = {}",
            self.algorithm,
            path.display(),
            hash_to_hex(&hash)
        );
        Ok(hash)
    }

    /// The configured algorithm.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

impl ContentDigest for Hasher {
    fn digest(&self, path: &Path) -> Result<Hash, HashError> {
        self.full_hash(path)
    }

    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

/// Feed every chunk read from `reader` to `update` until end of data.
fn stream_into<R: Read>(
    mut reader: R,
    path: &Path,
    mut update: impl FnMut(&[u8]),
) -> Result<(), HashError> {
    let mut buffer = vec![0u8; HASH_BUFFER_SIZE];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => return Ok(()),
            Ok(n) => update(&buffer[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(HashError::from_io(path, e)),
        }
    }
}

/// Render a hash as lowercase hex.
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
