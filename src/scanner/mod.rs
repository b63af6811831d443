//! Scanner module for directory traversal and file content access.
//!
//! This module provides functionality for:
//! - Sequential directory walking using walkdir
//! - Filtering entries by size and filename pattern
//! - Content hashing with SHA-256 or BLAKE3
//! - Byte-by-byte file comparison for paranoid mode
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`filter`]: Size and glob predicates applied to discovered files
//! - [`hasher`]: Streaming file hashing
//! - [`compare`]: Lock-step byte comparison of two files
//!
//! # Example
//!
//! ```no_run
//! use dupes::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), WalkerConfig::default());
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod compare;
pub mod filter;
pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use compare::{files_identical, readers_identical, COMPARE_BUFFER_SIZE};
pub use filter::FileFilter;
pub use hasher::{hash_to_hex, ContentDigest, Hash, HashAlgorithm, Hasher};
pub use walker::Walker;

/// A single filesystem entry discovered by the walker.
///
/// Produced once per entry and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the entry, as reached from the walk root
    pub path: PathBuf,
    /// Size in bytes as reported by the entry's metadata
    pub size: u64,
    /// Whether the entry is a regular file (not a directory, symlink, socket...)
    pub is_regular: bool,
}

impl FileEntry {
    /// Create a new entry for a regular file.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            is_regular: true,
        }
    }

    /// Create a new entry for something that is not a regular file.
    #[must_use]
    pub fn special(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            is_regular: false,
        }
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links during traversal.
    /// Off by default: a symlink is reported as a non-regular entry.
    pub follow_symlinks: bool,
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The walk itself failed without an underlying I/O error (e.g. a symlink loop).
    #[error("Walk error for {path}: {message}")]
    Walk {
        /// Path where the error occurred
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// Hashing or comparing a file's content failed.
    #[error(transparent)]
    HashError(#[from] HashError),
}

/// Errors that can occur during file hashing or comparison.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    /// Classify an I/O error raised while reading `path`.
    pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound(path) | Self::PermissionDenied(path) => path,
            Self::Io { path, .. } => path,
        }
    }
}
