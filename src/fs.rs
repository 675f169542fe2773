//! Existence checks and idempotent directory creation.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FsError, Result};

/// Permission bits for directories created by [`ensure_directory`]
/// (subject to the process umask). Ignored on platforms without Unix modes.
pub const DIR_MODE: u32 = 0o770;

/// The two shapes of entry the existence checks distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// Check whether `path` is an existing directory.
///
/// Returns `Ok(false)` when nothing exists there, and
/// [`FsError::TypeMismatch`] when something other than a directory does.
pub fn dir_exists(path: impl AsRef<Path>) -> Result<bool> {
    entry_exists(path.as_ref(), EntryKind::Directory)
}

/// Check whether `path` is an existing file.
///
/// Returns `Ok(false)` when nothing exists there, and
/// [`FsError::TypeMismatch`] when a directory does.
pub fn file_exists(path: impl AsRef<Path>) -> Result<bool> {
    entry_exists(path.as_ref(), EntryKind::File)
}

/// Make sure `path` is a directory, creating it and any missing parents.
///
/// Returns `true` if the directory had to be created, `false` if it was
/// already there.
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if dir_exists(path)? {
        return Ok(false);
    }

    dir_builder()
        .create(path)
        .map_err(|e| FsError::io(path, e))?;
    log::debug!("Created directory {}", path.display());
    Ok(true)
}

fn entry_exists(path: &Path, expected: EntryKind) -> Result<bool> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(FsError::io(path, e)),
    };

    let found = if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };
    if found != expected {
        return Err(FsError::TypeMismatch {
            path: path.to_path_buf(),
            expected,
            found,
        });
    }
    Ok(true)
}

#[cfg(unix)]
fn dir_builder() -> std::fs::DirBuilder {
    use std::os::unix::fs::DirBuilderExt;

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true).mode(DIR_MODE);
    builder
}

#[cfg(not(unix))]
fn dir_builder() -> std::fs::DirBuilder {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    builder
}
