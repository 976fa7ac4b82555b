//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, GateConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the gate passed.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load configuration and execute the selected command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        self.dispatch_with_config(cli, config, ui)
    }

    /// Execute the selected command with an already loaded configuration.
    pub fn dispatch_with_config(
        &self,
        cli: &Cli,
        config: GateConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Commands::Scan(args) => {
                let cmd = super::scan::ScanCommand::new(
                    &self.project_root,
                    args.clone(),
                    config.scan,
                    cli.format,
                );
                cmd.execute(ui)
            }
            Commands::Coverage(args) => {
                let cmd = super::coverage::CoverageCommand::new(
                    &self.project_root,
                    args.clone(),
                    config.coverage,
                    cli.format,
                );
                cmd.execute(ui)
            }
        }
    }
}

/// Resolve a user-supplied path against the project root.
///
/// Relative paths stay as typed when the project root is the current
/// directory, so reports show the same paths the user passed in.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || project_root == Path::new(".") {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
