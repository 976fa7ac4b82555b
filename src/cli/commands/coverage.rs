//! Coverage command implementation.
//!
//! The `qgate coverage` command runs the test suite under coverage and
//! checks the reported percentages against per-module thresholds.

use std::path::{Path, PathBuf};

use crate::cli::args::CoverageArgs;
use crate::config::CoverageSettings;
use crate::coverage::{parse_override, CoverageReport, ThresholdTable};
use crate::error::{GateError, Result};
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The coverage command implementation.
pub struct CoverageCommand {
    project_root: PathBuf,
    args: CoverageArgs,
    settings: CoverageSettings,
    format: OutputFormat,
}

impl CoverageCommand {
    /// Create a new coverage command.
    pub fn new(
        project_root: &Path,
        args: CoverageArgs,
        settings: CoverageSettings,
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
    pub fn args(&self) -> &CoverageArgs {
        &self.args
    }

    /// Configured thresholds with `--threshold` overrides applied.
    fn thresholds(&self) -> Result<ThresholdTable> {
        let mut table = self.settings.threshold_table();
        for raw in &self.args.thresholds {
            let (module, percent) = parse_override(raw)?;
            table.set(module, percent);
        }
        Ok(table)
    }

    fn format_output(&self, report: &CoverageReport) -> String {
        let mut output = Vec::new();

        match self.format {
            OutputFormat::Json => JsonFormatter::new()
                .format_coverage(report, &mut output)
                .ok(),
            OutputFormat::Human => HumanFormatter::new()
                .format_coverage(report, &mut output)
                .ok(),
        };

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for CoverageCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let thresholds = self.thresholds()?;
        let human = self.format == OutputFormat::Human;

        if human {
            match &self.args.module {
                Some(module) => ui.show_header(&format!("Running coverage check for {}...", module)),
                None => ui.show_header("Running coverage check..."),
            }
        }

        let runner = self
            .settings
            .runner(self.args.module.clone(), &self.project_root);

        let output = match runner.run() {
            Ok(output) => output,
            Err(e @ GateError::ToolMissing { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if human && ui.output_mode().shows_command_output() {
            ui.message(output.trim_end());
        }

        let sample = self.settings.parser().parse(&output);
        tracing::debug!("Parsed coverage for {} module(s)", sample.len());

        if sample.is_empty() && human {
            ui.warning("No coverage data found in runner output");
        }

        let report = CoverageReport::new(sample, thresholds);
        let rendered = self.format_output(&report);

        if !human {
            ui.message(rendered.trim_end());
        } else if report.verdict.passed {
            ui.success("Coverage meets all thresholds");
        } else {
            ui.message("Coverage below thresholds:");
            for line in rendered.lines() {
                ui.message(line);
            }
        }

        if report.verdict.passed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.verdict.exit_code()))
        }
    }
}
