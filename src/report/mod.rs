//! Report formatters.
//!
//! Renders scan findings and coverage verdicts as human-readable text or
//! JSON. Formatters write to any [`Write`] so tests and alternative frontends
//! can capture output directly.

pub mod human;
pub mod json;

use crate::coverage::CoverageReport;
use crate::scan::ScanReport;
use std::io::Write;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting gate results.
pub trait ReportFormatter {
    /// Format scan findings to the given writer.
    fn format_scan<W: Write>(&self, report: &ScanReport, writer: &mut W) -> std::io::Result<()>;

    /// Format a coverage verdict to the given writer.
    fn format_coverage<W: Write>(
        &self,
        report: &CoverageReport,
        writer: &mut W,
    ) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
