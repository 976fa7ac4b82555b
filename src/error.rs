//! Error types for qgate operations.
//!
//! This module defines [`GateError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-item problems (an unreadable document, an unparseable output line)
//!   never surface as errors; they are skipped at the item boundary
//! - Configuration and environment problems use `GateError` variants

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for qgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A signature rule pattern did not compile.
    #[error("Invalid pattern for rule '{rule}': {message}")]
    InvalidPattern { rule: String, message: String },

    /// Scan target does not exist.
    #[error("Scan target not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// The external coverage tool is not installed.
    #[error("{tool} not found. Install with: {hint}")]
    ToolMissing { tool: String, hint: String },

    /// The external coverage tool could not be run.
    #[error("Command failed: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for qgate operations.
pub type Result<T> = std::result::Result<T, GateError>;
