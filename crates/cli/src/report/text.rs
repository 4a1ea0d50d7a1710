// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! This is the CI-action surface other tooling greps, so the wording is
//! fixed: `No TODOs found!` on an empty result, otherwise a header line
//! (with its trailing space) followed by `<path> (Line <n>): <text>` per
//! match.

use std::fmt::Write;

use super::ReportFormatter;
use crate::scanner::ScanReport;

pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> anyhow::Result<String> {
        if report.records.is_empty() {
            return Ok("No TODOs found!\n".to_string());
        }

        let mut out = String::new();
        writeln!(out, "Found TODO's in the following files: ")?;
        for record in &report.records {
            writeln!(out, "{} (Line {}): {}", record.path.display(), record.line, record.text)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
