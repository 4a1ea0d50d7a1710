// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for scan results.

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::scanner::ScanReport;

/// Renders a completed scan into an output string.
pub trait ReportFormatter {
    fn format(&self, report: &ScanReport) -> anyhow::Result<String>;
}
