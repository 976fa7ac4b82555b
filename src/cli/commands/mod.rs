//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and reports through a
//! [`UserInterface`](crate::ui::UserInterface). Commands are routed by
//! [`CommandDispatcher`], which loads configuration once for all of them.

pub mod coverage;
pub mod dispatcher;
pub mod scan;

pub use coverage::CoverageCommand;
pub use dispatcher::{resolve_path, Command, CommandDispatcher, CommandResult};
pub use scan::ScanCommand;
