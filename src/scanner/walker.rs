//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! [`Walker`] traverses a directory tree and yields one [`FileEntry`] per
//! filesystem entry, in file-name order within each directory. Failures on
//! individual entries are yielded as [`ScanError`] items instead of ending
//! the iteration, so a caller can log them and keep going.
//!
//! The iterator is lazy, finite and single-pass.
//!
//! # Example
//!
//! ```no_run
//! use dupes::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"), WalkerConfig::default());
//! let regular = walker
//!     .walk()
//!     .filter_map(Result::ok)
//!     .filter(|entry| entry.is_regular)
//!     .count();
//! println!("{regular} regular files");
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError, WalkerConfig};

/// Sequential directory walker.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// The root may also be a single file, in which case only that file is
    /// yielded.
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Walk the directory tree, yielding every entry below (and including)
    /// the root.
    ///
    /// A root that cannot be opened yields a single error and nothing else.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .map(move |entry_result| -> Result<FileEntry, ScanError> {
                let entry = entry_result.map_err(|e| self.handle_walk_error(e))?;
                let metadata = entry.metadata().map_err(|e| self.handle_walk_error(e))?;

                let path = entry.into_path();
                if metadata.is_file() {
                    Ok(FileEntry::new(path, metadata.len()))
                } else {
                    log::trace!("Non-regular entry: {}", path.display());
                    Ok(FileEntry::special(path, metadata.len()))
                }
            })
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn handle_walk_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        if let Some(ancestor) = error.loop_ancestor() {
            log::debug!(
                "Symlink loop at {} (points to {})",
                path.display(),
                ancestor.display()
            );
            return ScanError::Walk {
                path,
                message: format!("filesystem loop back to {}", ancestor.display()),
            };
        }

        let message = error.to_string();
        match error.into_io_error() {
            Some(io) => match io.kind() {
                ErrorKind::PermissionDenied => {
                    log::debug!("Permission denied: {}", path.display());
                    ScanError::PermissionDenied(path)
                }
                ErrorKind::NotFound => {
                    log::debug!("Not found (may have been deleted): {}", path.display());
                    ScanError::NotFound(path)
                }
                _ => ScanError::Io { path, source: io },
            },
            None => ScanError::Walk { path, message },
        }
    }
}
