//! Human-readable output formatter.

use super::ReportFormatter;
use crate::coverage::CoverageReport;
use crate::scan::ScanReport;
use std::io::Write;

/// Formats reports for terminal display.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for HumanFormatter {
    fn format_scan<W: Write>(&self, report: &ScanReport, writer: &mut W) -> std::io::Result<()> {
        for finding in &report.findings {
            writeln!(writer, "  {}", finding.location())?;
            writeln!(writer, "    {}", finding.content)?;
            writeln!(writer, "    → {}", finding.remediation)?;
            writeln!(writer)?;
        }

        if !report.findings.is_empty() {
            writeln!(
                writer,
                "Found {} potential issue(s) in {} scanned file(s)",
                report.findings.len(),
                report.documents
            )?;
        }

        Ok(())
    }

    fn format_coverage<W: Write>(
        &self,
        report: &CoverageReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for shortfall in &report.verdict.shortfalls {
            writeln!(writer, "  - {}", shortfall)?;
        }
        Ok(())
    }
}
