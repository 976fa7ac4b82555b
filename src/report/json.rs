//! JSON output formatter.
//!
//! Formats gate results as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::coverage::CoverageReport;
use crate::scan::{ScanFinding, ScanReport};
use serde::Serialize;
use std::io::Write;

/// Formats reports as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonScanOutput<'a> {
    passed: bool,
    findings: &'a [ScanFinding],
    summary: JsonScanSummary,
}

#[derive(Serialize)]
struct JsonScanSummary {
    findings: usize,
    files: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_scan<W: Write>(&self, report: &ScanReport, writer: &mut W) -> std::io::Result<()> {
        let output = JsonScanOutput {
            passed: report.is_clean(),
            findings: &report.findings,
            summary: JsonScanSummary {
                findings: report.findings.len(),
                files: report.documents,
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }

    fn format_coverage<W: Write>(
        &self,
        report: &CoverageReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}
