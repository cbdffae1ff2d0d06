//! Atomic file write helper.
//!
//! Writes to a temp file in the destination directory, syncs it, then renames it
//! over the destination so a crash never leaves a half-written config.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    if let Err(err) = tmp.persist(path) {
        return Err(err.error);
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Atomic write complete");
    Ok(())
}
