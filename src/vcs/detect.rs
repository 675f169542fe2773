//! VCS root detection by filesystem markers.
//!
//! Walks ancestor directories (lexically, see [`walk_up`](crate::walk_up))
//! looking for any of the [`MARKERS`]. Checkouts holding several markers
//! resolve to the earliest entry in the table.

use std::path::Path;

use super::{MARKERS, VcsRoot};
use crate::error::Result;
use crate::fs::dir_exists;
use crate::path::walk_up_from;

/// Find the checkout root containing `path`.
///
/// Checks `path` itself first, then each ancestor. At each level the markers
/// are tried in [`MARKERS`] order and the first present one wins.
///
/// Running out of ancestors is not an error: the result is
/// [`VcsRoot::default()`]. Any marker check that fails for a reason other than
/// absence ends the search with that error, including a marker name that
/// exists but is not a directory.
pub fn find_vcs_root(path: impl AsRef<Path>) -> Result<VcsRoot> {
    let path = path.as_ref();
    for candidate in walk_up_from(path) {
        log::trace!("Checking {} for VCS markers", candidate.display());
        for (kind, marker) in MARKERS {
            if dir_exists(candidate.join(marker))? {
                log::debug!("Found {kind} root at {}", candidate.display());
                return Ok(VcsRoot {
                    kind,
                    path: candidate,
                });
            }
        }
    }

    log::debug!("No VCS root above {}", path.display());
    Ok(VcsRoot::default())
}
