//! qgate - Quality gates for error messages and test coverage.
//!
//! qgate runs two independent checks in a development workflow:
//! a heuristic scan that flags vague error messages in source text, and a
//! coverage gate that parses test-runner output and compares per-module
//! percentages against configured minimums.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`coverage`] - Coverage parsing and threshold evaluation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human and JSON report formatters
//! - [`scan`] - Error message classification and document scanning
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use qgate::coverage::{evaluate, CoverageParser, ThresholdTable};
//! use qgate::scan::Classifier;
//!
//! let findings = Classifier::default().classify("app.py", r#"abort(400, "Invalid")"#);
//! assert_eq!(findings[0].rule, "generic-invalid");
//!
//! let sample = CoverageParser::default().parse("app/models/user.py 10 0 100%\nTOTAL 10 0 100%");
//! let verdict = evaluate(&sample, &ThresholdTable::default());
//! assert!(!verdict.passed); // routes and utils are missing
//! ```

pub mod cli;
pub mod config;
pub mod coverage;
pub mod error;
pub mod report;
pub mod scan;
pub mod ui;

pub use error::{GateError, Result};
