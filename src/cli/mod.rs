//! Command-line interface for qgate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CoverageArgs, ScanArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
