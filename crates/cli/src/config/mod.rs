// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan configuration and startup resolution.
//!
//! Precedence is resolved once, at startup: `INPUT_*` environment
//! variables beat command-line flags, which beat built-in defaults. The
//! result is a single immutable [`ScanConfig`] passed by value into the
//! scanner; nothing reads the environment after this point.

pub mod defaults;

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::ScanError;
use crate::pattern;

/// Immutable configuration for one scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory, as given (never canonicalized).
    pub path: PathBuf,
    /// Dot-prefixed suffixes; a file is scanned when its name ends with
    /// one of them, case-sensitively.
    pub extensions: Vec<String>,
    /// Active marker regex fragments, in order.
    pub patterns: Vec<String>,
}

/// `INPUT_*` variables set by CI action runners.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub path: Option<String>,
    pub extensions: Option<String>,
    pub todo_pattern: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            path: std::env::var("INPUT_PATH").ok(),
            extensions: std::env::var("INPUT_EXTENSIONS").ok(),
            todo_pattern: std::env::var("INPUT_TODO_PATTERN").ok(),
        }
    }
}

impl ScanConfig {
    /// Resolves flags, environment overrides, and defaults into a config,
    /// validating that the root names an existing directory.
    pub fn resolve(cli: &Cli, env: &EnvOverrides) -> Result<Self, ScanError> {
        let path = PathBuf::from(env.path.as_deref().unwrap_or(&cli.path));

        // CI runners join list inputs with ", "; the CLI flag uses bare commas.
        let extensions = match (&env.extensions, &cli.extensions) {
            (Some(list), _) => split_list(list, ", "),
            (None, Some(list)) => split_list(list, ","),
            (None, None) => defaults::extensions(),
        };

        // A single override fragment replaces the entire built-in table.
        let patterns = match (&env.todo_pattern, &cli.todo_pattern) {
            (Some(fragment), _) => vec![fragment.clone()],
            (None, Some(fragment)) => vec![fragment.clone()],
            (None, None) => pattern::default_fragments(),
        };

        if !path.exists() {
            return Err(ScanError::RootMissing(path));
        }
        if !path.is_dir() {
            return Err(ScanError::NotADirectory(path));
        }

        Ok(Self { path, extensions, patterns })
    }
}

fn split_list(list: &str, separator: &str) -> Vec<String> {
    list.split(separator).map(str::to_string).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
