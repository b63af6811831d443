//! Byte-by-byte file comparison for paranoid mode.
//!
//! Two files are read in lock-step with fixed-size buffers. The files are
//! identical only if every pair of chunks matches and both reach end of
//! data in the same iteration.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::HashError;

/// Buffer size for each side of a comparison (one common memory page).
pub const COMPARE_BUFFER_SIZE: usize = 4096;

/// Compare two files byte-for-byte.
///
/// # Errors
///
/// Returns [`HashError`] if either file cannot be opened or a read fails.
/// Both handles are closed before returning.
///
/// # Example
///
/// ```no_run
/// use dupes::scanner::files_identical;
/// use std::path::Path;
///
/// let same = files_identical(Path::new("a.bin"), Path::new("b.bin")).unwrap();
/// println!("identical: {same}");
/// ```
pub fn files_identical(a: &Path, b: &Path) -> Result<bool, HashError> {
    let file_a = File::open(a).map_err(|e| HashError::from_io(a, e))?;
    let file_b = File::open(b).map_err(|e| HashError::from_io(b, e))?;

    readers_identical(file_a, file_b).map_err(|failure| match failure {
        ReadFailure::Left(e) => HashError::from_io(a, e),
        ReadFailure::Right(e) => HashError::from_io(b, e),
    })
}

/// Which side of a comparison failed to read.
#[derive(Debug)]
pub enum ReadFailure {
    /// The first reader failed.
    Left(io::Error),
    /// The second reader failed.
    Right(io::Error),
}

/// Compare two readers chunk by chunk.
///
/// # Errors
///
/// Returns the first read error, tagged with the side it came from.
pub fn readers_identical<A: Read, B: Read>(mut a: A, mut b: B) -> Result<bool, ReadFailure> {
    let mut buf_a = [0u8; COMPARE_BUFFER_SIZE];
    let mut buf_b = [0u8; COMPARE_BUFFER_SIZE];

    loop {
        let len_a = fill(&mut a, &mut buf_a).map_err(ReadFailure::Left)?;
        let len_b = fill(&mut b, &mut buf_b).map_err(ReadFailure::Right)?;

        // Slice equality includes the lengths, so one side ending early
        // ("abc" vs "abcd") never passes on stale buffer contents.
        if buf_a[..len_a] != buf_b[..len_b] {
            return Ok(false);
        }

        if len_a == 0 {
            // Both ended in this iteration.
            return Ok(true);
        }
    }
}

/// Read until `buf` is full or the reader is exhausted.
///
/// A short count therefore always means end of data.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
