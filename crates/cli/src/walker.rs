// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory walking for file discovery.
//!
//! Walks the whole subtree with the `ignore` crate's walker, standard
//! filters disabled so hidden files and gitignored files are visited like
//! any other. Entries are sorted by file name, which keeps output order
//! stable across runs on an unchanged tree.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Configuration for directory walking.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symlinked directories. Off by default; symlinked
    /// files are still visited and fall into the per-file error path if
    /// their target is unreadable.
    pub follow_symlinks: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self { follow_symlinks: false }
    }
}

pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walks `root` and collects every non-directory entry whose file name
    /// ends with one of `suffixes` (exact, case-sensitive match).
    pub fn walk_collect(&self, root: &Path, suffixes: &[String]) -> Vec<PathBuf> {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "walk error, entry skipped");
                    continue;
                }
            };
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())) {
                files.push(entry.into_path());
            }
        }
        files
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
