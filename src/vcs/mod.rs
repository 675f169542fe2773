//! Version control systems recognized by their checkout markers.
//!
//! Use [`find_vcs_root`] to locate the checkout containing a path.

pub(crate) mod detect;

use std::path::PathBuf;

pub use detect::find_vcs_root;

/// Version control system type.
///
/// [`VcsKind::None`] is both the default and the "nothing detected" answer.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum VcsKind {
    #[default]
    None,
    Git,
    Mercurial,
    Bazaar,
    Subversion,
}

/// Marker directory for each detectable kind.
///
/// When one directory holds several markers, the earliest entry wins.
pub const MARKERS: [(VcsKind, &str); 4] = [
    (VcsKind::Git, ".git"),
    (VcsKind::Mercurial, ".hg"),
    (VcsKind::Bazaar, ".bzr"),
    (VcsKind::Subversion, ".svn"),
];

impl VcsKind {
    /// Name of the directory marking a checkout root, or `None` for [`VcsKind::None`].
    pub fn marker(self) -> Option<&'static str> {
        MARKERS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, marker)| *marker)
    }

    /// Look up the kind a marker directory name belongs to.
    pub fn from_marker(marker: &str) -> Option<Self> {
        MARKERS
            .iter()
            .find(|(_, name)| *name == marker)
            .map(|(kind, _)| *kind)
    }

    /// Returns true for [`VcsKind::None`].
    pub fn is_none(self) -> bool {
        self == VcsKind::None
    }
}

/// Outcome of [`find_vcs_root`].
///
/// The default value (`VcsKind::None` with an empty path) means the walk
/// ran out of ancestors without seeing a marker.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VcsRoot {
    pub kind: VcsKind,
    /// Directory holding the marker; empty when nothing was found.
    pub path: PathBuf,
}

impl VcsRoot {
    /// Returns true if a checkout was detected.
    pub fn is_found(&self) -> bool {
        !self.kind.is_none()
    }
}
