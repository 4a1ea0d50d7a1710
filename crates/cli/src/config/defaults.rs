// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! The default marker-pattern table lives with the matcher, in
//! `pattern::DEFAULT_MARKER_PATTERNS`.

/// Default root path for the scan.
pub const ROOT: &str = ".";

/// Default file extension suffixes, matched case-sensitively against the
/// end of the file name (`.PY` does not match `.py`).
pub const EXTENSIONS: [&str; 12] = [
    ".py", ".js", ".html", ".css", ".php", ".cs", ".cpp", ".java", ".sh", ".twig", ".yml",
    ".yaml",
];

/// The default suffix list as owned strings.
pub fn extensions() -> Vec<String> {
    EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
