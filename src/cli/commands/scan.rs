//! Scan command implementation.
//!
//! The `qgate scan` command flags vague error messages in source files.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::config::ScanSettings;
use crate::error::{GateError, Result};
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
use crate::scan::ScanReport;
use crate::ui::UserInterface;

use super::dispatcher::{resolve_path, Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    project_root: PathBuf,
    args: ScanArgs,
    settings: ScanSettings,
    format: OutputFormat,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(
        project_root: &Path,
        args: ScanArgs,
        settings: ScanSettings,
        format: OutputFormat,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            settings,
            format,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ScanArgs {
        &self.args
    }

    fn format_output(&self, report: &ScanReport) -> String {
        let mut output = Vec::new();

        match self.format {
            OutputFormat::Json => JsonFormatter::new().format_scan(report, &mut output).ok(),
            OutputFormat::Human => HumanFormatter::new().format_scan(report, &mut output).ok(),
        };

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = resolve_path(&self.project_root, &self.args.path);
        let scanner = self.settings.scanner()?;

        if self.format == OutputFormat::Human {
            ui.show_header(&format!(
                "Scanning for generic error messages in: {}",
                target.display()
            ));
        }

        let report = match scanner.scan(&target) {
            Ok(report) => report,
            Err(e @ GateError::TargetNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            "Scanned {} file(s), {} finding(s)",
            report.documents,
            report.findings.len()
        );

        let output = self.format_output(&report);

        if self.format == OutputFormat::Json {
            ui.message(output.trim_end());
        } else if report.is_clean() {
            ui.success("No generic error messages detected");
        } else {
            for line in output.lines() {
                ui.message(line);
            }
        }

        if report.is_clean() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
