//! Atomic file replacement.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::IoError;

/// Replace a file's content atomically.
///
/// Writes to a temp file in the target's directory, then renames it over the
/// target. The target is never truncated in place, so a crash mid-write
/// leaves either the old content or the new content, never a partial file.
///
/// # Errors
/// `System` for any underlying I/O failure, including the final rename.
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), IoError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| IoError::System(err.error))?;
    Ok(())
}
