// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output, for downstream tooling.

use serde_json::json;

use super::ReportFormatter;
use crate::scanner::ScanReport;

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> anyhow::Result<String> {
        let doc = json!({
            "todos": report.records,
            "summary": {
                "count": report.records.len(),
                "stats": report.stats,
            },
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
