use std::error::Error;
use std::path::PathBuf;

use insta::assert_snapshot;
use vcsroot::{EntryKind, FsError};

#[test]
fn display_dir_found_file() {
    let err = FsError::TypeMismatch {
        path: PathBuf::from("/tmp/repo/notes.txt"),
        expected: EntryKind::Directory,
        found: EntryKind::File,
    };

    assert_snapshot!(err.to_string(), @"expected /tmp/repo/notes.txt to be a directory, but found a file");
}

#[test]
fn display_file_found_dir() {
    let err = FsError::TypeMismatch {
        path: PathBuf::from("/tmp/repo/.git"),
        expected: EntryKind::File,
        found: EntryKind::Directory,
    };

    assert_snapshot!(err.to_string(), @"expected /tmp/repo/.git to be a file, but found a directory");
}

#[test]
fn display_io_keeps_source() {
    let err = FsError::Io {
        path: PathBuf::from("/root/private"),
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    };

    assert_snapshot!(err.to_string(), @"failed to access /root/private");
    let source = err.source().expect("io source should be chained");
    assert_eq!(
        source.downcast_ref::<std::io::Error>().map(|e| e.kind()),
        Some(std::io::ErrorKind::PermissionDenied)
    );
}
