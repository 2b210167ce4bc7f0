//! Guarded text reads.

use std::fs;
use std::io::Read;
use std::path::Path;

use memchr::memchr;

use crate::error::IoError;

/// Quick binary check: NUL byte anywhere in the first 8 KiB.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let check_len = buffer.len().min(8192);
    memchr(0, &buffer[..check_len]).is_some()
}

/// Read a file as text, refusing oversized, binary, or undecodable content.
///
/// Decoding is strict: a regenerated file is written back in full, so a
/// lossy decode would silently rewrite hand-written bytes outside any
/// region. A file that does not decode cleanly is not a generation target.
///
/// # Errors
/// `NotFound` when the file is missing, `TooLarge` when it exceeds
/// `max_bytes`, `Binary` when NUL bytes are detected, `Encoding` for invalid
/// UTF-8, `System` for any other I/O failure.
pub fn read_text<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata =
        fs::metadata(path).map_err(|_| IoError::NotFound(path.display().to_string()))?;
    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
    fs::File::open(path)?.read_to_end(&mut buffer)?;

    if is_binary(&buffer) {
        return Err(IoError::Binary);
    }
    String::from_utf8(buffer).map_err(|_| IoError::Encoding)
}
