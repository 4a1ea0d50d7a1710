// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The tree scanner: walk, read, match, collect.
//!
//! Single-threaded and fully synchronous. One file handle is open at a
//! time; each file is read to completion (or fails) before the next one
//! is touched. Fatal errors are limited to pattern compilation and an
//! invalid root; a file that cannot be read is skipped with a warning and
//! the scan continues.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::file_reader;
use crate::pattern::TodoMatcher;
use crate::walker::{FileWalker, WalkerConfig};

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Path as encountered during the walk, never canonicalized.
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// Matching line with leading and trailing whitespace stripped.
    pub text: String,
}

/// Per-scan counters, reported through logging and the JSON output.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ScanStats {
    /// Files that matched a configured suffix.
    pub files_considered: usize,
    /// Files read successfully.
    pub files_scanned: usize,
    /// Files skipped because they could not be read.
    pub files_skipped: usize,
    /// Files that needed the Latin-1 fallback decode.
    pub fallback_decodes: usize,
}

/// Result of one scan: matches in walk order, plus counters.
#[derive(Debug)]
pub struct ScanReport {
    pub records: Vec<MatchRecord>,
    pub stats: ScanStats,
}

pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scans the configured tree and collects every matching line.
    ///
    /// Pattern compilation happens before any file I/O, so an invalid or
    /// empty fragment list never touches the filesystem.
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let matcher = TodoMatcher::compile(&self.config.patterns)?;

        let files = FileWalker::new(WalkerConfig::default())
            .walk_collect(&self.config.path, &self.config.extensions);

        let mut records = Vec::new();
        let mut stats = ScanStats { files_considered: files.len(), ..ScanStats::default() };

        for path in &files {
            match self.scan_file(path, &matcher, &mut records) {
                Ok(fell_back) => {
                    stats.files_scanned += 1;
                    if fell_back {
                        stats.fallback_decodes += 1;
                    }
                }
                Err(err) => {
                    stats.files_skipped += 1;
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
                }
            }
        }

        tracing::debug!(
            files_considered = stats.files_considered,
            files_scanned = stats.files_scanned,
            files_skipped = stats.files_skipped,
            fallback_decodes = stats.fallback_decodes,
            matches = records.len(),
            "scan complete"
        );

        Ok(ScanReport { records, stats })
    }

    /// Scans one file, appending matches to `records`.
    ///
    /// Lines are decoded as UTF-8 until one fails, then the whole file is
    /// re-scanned from line 1 under Latin-1. Matches collected during the
    /// partial UTF-8 pass are kept, so lines before the failure point can
    /// be reported twice.
    ///
    /// Returns whether the Latin-1 fallback was taken.
    fn scan_file(
        &self,
        path: &Path,
        matcher: &TodoMatcher,
        records: &mut Vec<MatchRecord>,
    ) -> std::io::Result<bool> {
        let bytes = file_reader::read_bytes(path)?;

        let mut decode_failed = false;
        for (index, raw) in file_reader::lines(&bytes).enumerate() {
            match std::str::from_utf8(raw) {
                Ok(line) => {
                    if matcher.is_match(line) {
                        records.push(record(path, index + 1, line));
                    }
                }
                Err(_) => {
                    decode_failed = true;
                    break;
                }
            }
        }

        if decode_failed {
            tracing::debug!(path = %path.display(), "UTF-8 decode failed, re-reading as Latin-1");
            for (index, raw) in file_reader::lines(&bytes).enumerate() {
                let line = file_reader::decode_latin1(raw);
                if matcher.is_match(&line) {
                    records.push(record(path, index + 1, &line));
                }
            }
        }

        Ok(decode_failed)
    }
}

fn record(path: &Path, line: usize, text: &str) -> MatchRecord {
    MatchRecord { path: path.to_path_buf(), line, text: text.trim().to_string() }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
