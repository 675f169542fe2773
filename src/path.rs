//! Lexical parent computation.
//!
//! Nothing here touches the filesystem: parents are derived from the path
//! text alone, so symlinks are never resolved and missing paths walk the same
//! way as existing ones.

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Return the logical parent of `path`, or an empty path when there is none.
///
/// - `""` and `/` have no parent.
/// - A top-level entry such as `/home` yields `/`.
/// - A bare relative name such as `home` yields `""`.
/// - Otherwise everything before the last separator, after collapsing
///   repeated separators and resolving `.`/`..` lexically. A leading `..`
///   has nothing to resolve against and is kept, so `../x` yields `..`.
///
/// Repeated application always reaches the empty path.
pub fn walk_up(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.as_os_str().is_empty() || is_root(path) {
        return PathBuf::new();
    }

    let cleaned = path.clean();
    match cleaned.parent() {
        Some(parent) => parent.to_path_buf(),
        // `/..` and `//` clean down to the root itself, which is still a step up.
        None if cleaned.has_root() && cleaned.as_os_str() != path.as_os_str() => cleaned,
        None => PathBuf::new(),
    }
}

/// Iterate `path` and each of its lexical ancestors, as produced by [`walk_up`].
///
/// The starting path is yielded as given (unless empty); the walk ends once
/// [`walk_up`] returns the empty path.
pub fn walk_up_from(path: impl AsRef<Path>) -> WalkUp {
    WalkUp {
        next: path.as_ref().to_path_buf(),
    }
}

/// Iterator returned by [`walk_up_from`].
#[derive(Debug, Clone)]
pub struct WalkUp {
    next: PathBuf,
}

impl Iterator for WalkUp {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        if self.next.as_os_str().is_empty() {
            return None;
        }
        let parent = walk_up(&self.next);
        Some(std::mem::replace(&mut self.next, parent))
    }
}

impl FusedIterator for WalkUp {}

/// Exactly the root separator, with no prefix and nothing after it.
fn is_root(path: &Path) -> bool {
    path.as_os_str() == std::path::MAIN_SEPARATOR_STR
}
