// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The TODO marker matcher.
//!
//! Each marker convention is one regex fragment. Fragments are validated
//! individually, then joined by `|` and compiled once, case-insensitively.
//! Matching is strictly per-line: a marker split across lines (an opening
//! `/*` on one line and the closing `*/` on another) is not detected.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// One marker convention: stable id, regex fragment, human description.
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub id: &'static str,
    pub fragment: &'static str,
    pub description: &'static str,
}

/// Built-in marker conventions.
///
/// Every fragment tolerates arbitrary whitespace around the word `todo`
/// but requires its delimiter characters literally, so `#   TODO   :`
/// matches while `# TODO` (no colon) does not.
pub const DEFAULT_MARKER_PATTERNS: [PatternSpec; 8] = [
    PatternSpec {
        id: "hash",
        fragment: r"#\s*todo\s*:",
        description: "hash comments (Python, Shell, YAML)",
    },
    PatternSpec {
        id: "double-slash",
        fragment: r"//\s*todo\s*:",
        description: "slash comments (C, C++, Java, JavaScript)",
    },
    PatternSpec {
        id: "block",
        fragment: r"/\*\s*todo\s*\*/",
        description: "one-line block comments (C, CSS)",
    },
    PatternSpec {
        id: "dash-arrow",
        fragment: r"--\s*todo\s*;",
        description: "dash comments (SQL, Lua)",
    },
    PatternSpec {
        id: "twig-pipe",
        fragment: r"\{\|\s*todo\s*\|\}",
        description: "Twig pipe delimiters",
    },
    PatternSpec {
        id: "twig-percent",
        fragment: r"%\{\s*todo\s*\}",
        description: "Twig percent blocks",
    },
    PatternSpec {
        id: "html",
        fragment: r"<\!--\s*todo\s*-->",
        description: "HTML comments",
    },
    PatternSpec {
        id: "twig-brace",
        fragment: r"\{\{\-\s*todo\s*\-\}\}",
        description: "Twig brace blocks",
    },
];

/// Returns the built-in fragments, in table order.
pub fn default_fragments() -> Vec<String> {
    DEFAULT_MARKER_PATTERNS.iter().map(|p| p.fragment.to_string()).collect()
}

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("no marker patterns configured")]
    Empty,

    #[error("invalid marker pattern `{fragment}`")]
    InvalidFragment {
        fragment: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// Compiled alternation over all configured marker fragments.
///
/// Stateless per line; each query is independent.
#[derive(Debug)]
pub struct TodoMatcher {
    regex: Regex,
}

impl TodoMatcher {
    /// Compiles `fragments` into one case-insensitive matcher.
    ///
    /// Fragments are validated one at a time so a failure names the
    /// offending fragment rather than the whole joined expression.
    pub fn compile(fragments: &[String]) -> Result<Self, PatternError> {
        if fragments.is_empty() {
            return Err(PatternError::Empty);
        }

        for fragment in fragments {
            compile_insensitive(fragment).map_err(|source| PatternError::InvalidFragment {
                fragment: fragment.clone(),
                source: Box::new(source),
            })?;
        }

        let joined = fragments.join("|");
        let regex =
            compile_insensitive(&joined).map_err(|source| PatternError::InvalidFragment {
                fragment: joined,
                source: Box::new(source),
            })?;

        Ok(Self { regex })
    }

    /// Whether `line` contains at least one marker.
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

fn compile_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
