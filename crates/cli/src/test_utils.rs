//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp directory populated with the given files.
pub fn temp_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    create_tree(dir.path(), files);
    dir
}
