//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::report::OutputFormat;

/// qgate - Quality gates for error messages and test coverage.
#[derive(Debug, Parser)]
#[command(name = "qgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .qgate/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan source files for generic error messages
    Scan(ScanArgs),

    /// Run tests with coverage and enforce thresholds
    Coverage(CoverageArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// File or directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }
}

/// Arguments for the `coverage` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CoverageArgs {
    /// Restrict the run to one module (e.g. models)
    pub module: Option<String>,

    /// Override a threshold (repeatable), e.g. --threshold models=95
    #[arg(short, long = "threshold", value_name = "MODULE=PERCENT")]
    pub thresholds: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scan_with_default_path() {
        let cli = Cli::parse_from(["qgate", "scan"]);
        match cli.command {
            Commands::Scan(args) => assert_eq!(args.path, PathBuf::from(".")),
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn parses_coverage_module_and_thresholds() {
        let cli = Cli::parse_from([
            "qgate",
            "coverage",
            "models",
            "--threshold",
            "models=95",
            "-t",
            "overall=85",
        ]);
        match cli.command {
            Commands::Coverage(args) => {
                assert_eq!(args.module.as_deref(), Some("models"));
                assert_eq!(args.thresholds, vec!["models=95", "overall=85"]);
            }
            _ => panic!("Expected Coverage command"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["qgate", "scan", "src", "--format", "json", "--debug"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.debug);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["qgate"]).is_err());
    }
}
