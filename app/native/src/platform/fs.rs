//! Atomic file replacement.
//!
//! Files are written to a temporary file in the destination directory and
//! renamed over the target, so a reader sees either the old or the new
//! content and never a partial write.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Returns the directory that will hold `path`, creating it if needed.
fn prepare_parent(path: &Path) -> io::Result<&Path> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    Ok(parent)
}

/// Atomically replaces `path` with `bytes`.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, or the
/// temporary file cannot be written, synced, or renamed into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = prepare_parent(path)?;

    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| err.error)?;

    tracing::trace!(path = %path.display(), bytes = bytes.len(), "file replaced");
    Ok(())
}

/// Atomically replaces `target` with a copy of `source`.
///
/// # Errors
///
/// Returns an error if `source` cannot be read or `target` cannot be replaced.
pub fn copy_atomic(source: &Path, target: &Path) -> io::Result<()> {
    let parent = prepare_parent(target)?;

    let mut staged = NamedTempFile::new_in(parent)?;
    let mut reader = fs::File::open(source)?;
    io::copy(&mut reader, staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    staged.persist(target).map_err(|err| err.error)?;

    tracing::trace!(
        source = %source.display(),
        target = %target.display(),
        "file copied"
    );
    Ok(())
}
