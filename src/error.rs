//! Error types for filesystem inspection.
//!
//! Absence is never an error: existence checks answer `false` and the VCS
//! search answers [`VcsKind::None`](crate::VcsKind::None). What remains is
//! either the wrong kind of entry at a path, or the platform refusing to tell
//! us.

use std::path::{Path, PathBuf};

use crate::fs::EntryKind;

/// Result alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Failure while inspecting or creating a filesystem entry.
///
/// # Usage
///
/// ```
/// use vcsroot::{EntryKind, FsError};
///
/// # let dir = tempfile::tempdir().unwrap();
/// # let file = dir.path().join("notes.txt");
/// # std::fs::write(&file, "").unwrap();
/// match vcsroot::dir_exists(&file) {
///     Err(FsError::TypeMismatch { expected: EntryKind::Directory, .. }) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// The path exists, but is not the kind of entry the caller asked about
    #[error("expected {} to be a {expected}, but found a {found}", .path.display())]
    TypeMismatch {
        path: PathBuf,
        expected: EntryKind,
        found: EntryKind,
    },

    /// Stat or create failed for a reason other than absence
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        FsError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the failing operation was looking at.
    pub fn path(&self) -> &Path {
        match self {
            FsError::TypeMismatch { path, .. } | FsError::Io { path, .. } => path,
        }
    }
}
