//! Coverage threshold enforcement.
//!
//! - [`CoverageRunner`] - Runs the test runner and captures its output
//! - [`CoverageParser`] - Extracts a [`CoverageSample`] from that output
//! - [`ThresholdTable`] - Configured minimum per module
//! - [`evaluate`] - Produces a [`GateVerdict`] listing every [`Shortfall`]
//!
//! Parsing and evaluation are pure; only the runner touches the system.

pub mod runner;
pub mod sample;
pub mod thresholds;
pub mod verdict;

pub use runner::{CoverageRunner, DEFAULT_INSTALL_HINT, DEFAULT_PROGRAM};
pub use sample::{CoverageParser, CoverageSample, DEFAULT_SOURCE_ROOT, OVERALL_KEY};
pub use thresholds::{parse_override, ThresholdTable, DEFAULT_THRESHOLDS};
pub use verdict::{evaluate, CoverageReport, GateVerdict, Shortfall};
