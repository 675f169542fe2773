//! Relative starting paths resolve against the working directory.
//!
//! Kept in its own test binary because it changes the process cwd.

use std::fs;
use std::path::PathBuf;

use vcsroot::{VcsKind, VcsRoot, find_vcs_root};

#[test]
fn leading_parent_walks_real_ancestors() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base");
    let work = base.join("work");
    // A checkout under cwd that shares the name of the real target.
    fs::create_dir_all(work.join("proj").join(".git")).unwrap();
    fs::create_dir_all(base.join("proj").join("src")).unwrap();
    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(&work).unwrap();

    let root = find_vcs_root("../proj/src").unwrap();
    assert_eq!(root, VcsRoot::default());

    fs::create_dir(base.join("proj").join(".hg")).unwrap();
    let root = find_vcs_root("../proj/src").unwrap();
    assert_eq!(root.kind, VcsKind::Mercurial);
    assert_eq!(root.path, PathBuf::from("../proj"));

    std::env::set_current_dir(original).unwrap();
}
