// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Marker pattern compilation.
//!
//! Marker conventions are expressed as regex fragments and combined into
//! a single case-insensitive alternation matcher.

pub mod matcher;

pub use matcher::{
    DEFAULT_MARKER_PATTERNS, PatternError, PatternSpec, TodoMatcher, default_fragments,
};
