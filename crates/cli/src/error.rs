// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal error taxonomy for the scanner.
//!
//! Only configuration and pattern-compilation failures are fatal; per-file
//! read errors are handled inside the scanner (skip and warn) and decode
//! failures are recovered via the Latin-1 fallback.

use std::path::PathBuf;

use thiserror::Error;

use crate::pattern::PatternError;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("root path does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("root path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
