//! Test runner invocation.
//!
//! Runs the coverage tool once, synchronously, and hands back its combined
//! output for parsing. There is no timeout: a hung runner hangs the gate.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::sample::DEFAULT_SOURCE_ROOT;
use crate::error::{GateError, Result};

/// Runner used when none is configured.
pub const DEFAULT_PROGRAM: &str = "pytest";

/// Install hint shown when the default runner is missing.
pub const DEFAULT_INSTALL_HINT: &str = "pip install pytest pytest-cov";

/// A coverage runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRunner {
    /// Program to run.
    pub program: String,
    /// Arguments always passed; `None` derives them from `source_root`.
    pub base_args: Option<Vec<String>>,
    /// Package whose coverage is measured.
    pub source_root: String,
    /// Restrict the run to a single module.
    pub module: Option<String>,
    /// Working directory.
    pub cwd: Option<PathBuf>,
    /// Shown to the user when `program` cannot be found.
    pub install_hint: String,
}

impl Default for CoverageRunner {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            base_args: None,
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
            module: None,
            cwd: None,
            install_hint: DEFAULT_INSTALL_HINT.to_string(),
        }
    }
}

impl CoverageRunner {
    /// Restrict the run to one module.
    pub fn with_module(mut self, module: Option<String>) -> Self {
        self.module = module;
        self
    }

    /// Run from `cwd`.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Full argument list.
    ///
    /// ```
    /// use qgate::coverage::CoverageRunner;
    ///
    /// let cmd = CoverageRunner::default().with_module(Some("models".into()));
    /// assert_eq!(
    ///     cmd.args(),
    ///     vec![
    ///         "--cov=app",
    ///         "--cov-report=term-missing",
    ///         "--cov",
    ///         "app.models",
    ///         "tests/test_models/",
    ///     ]
    /// );
    /// ```
    pub fn args(&self) -> Vec<String> {
        let mut args = match &self.base_args {
            Some(args) => args.clone(),
            None => vec![
                format!("--cov={}", self.source_root),
                "--cov-report=term-missing".to_string(),
            ],
        };

        if let Some(module) = &self.module {
            args.push("--cov".to_string());
            args.push(format!("{}.{}", self.source_root, module));
            args.push(format!("tests/test_{}/", module));
        }

        args
    }

    /// Command line for display.
    pub fn display(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the tool and return stdout followed by stderr.
    ///
    /// A failing test run is not an error; its output is still evaluated.
    /// A missing program is [`GateError::ToolMissing`].
    pub fn run(&self) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args());
        cmd.stdin(Stdio::null());

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        tracing::debug!("Running coverage: {}", self.display());

        let output = cmd.output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GateError::ToolMissing {
                    tool: self.program.clone(),
                    hint: self.install_hint.clone(),
                }
            } else {
                GateError::CommandFailed {
                    command: self.display(),
                    message: e.to_string(),
                }
            }
        })?;

        tracing::debug!("Coverage runner exited with {:?}", output.status.code());

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }
}
