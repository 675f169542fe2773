//! Locate version-control checkout roots and answer simple questions about
//! the filesystem.
//!
//! ```no_run
//! use vcsroot::{VcsKind, find_vcs_root};
//!
//! let root = find_vcs_root("/home/user/project/src")?;
//! if root.kind == VcsKind::Git {
//!     println!("git checkout at {}", root.path.display());
//! }
//! # Ok::<(), vcsroot::FsError>(())
//! ```

pub mod error;
pub mod fs;
pub mod path;
pub mod vcs;

pub use error::{FsError, Result};
pub use fs::{DIR_MODE, EntryKind, dir_exists, ensure_directory, file_exists};
pub use path::{WalkUp, walk_up, walk_up_from};
pub use vcs::{MARKERS, VcsKind, VcsRoot, find_vcs_root};
