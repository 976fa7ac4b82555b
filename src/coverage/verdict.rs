//! Threshold evaluation.

use serde::Serialize;
use std::fmt;

use super::sample::CoverageSample;
use super::thresholds::ThresholdTable;

/// A module whose measured coverage is below its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    /// Module key from the threshold table.
    pub module: String,
    /// Measured percentage (0 when the module was not measured).
    pub actual: u8,
    /// Configured minimum.
    pub target: u8,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}% < {}% (target)",
            self.module, self.actual, self.target
        )
    }
}

/// Pass/fail result of a coverage gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateVerdict {
    /// True iff there are no shortfalls.
    pub passed: bool,
    /// Shortfalls in threshold table order.
    pub shortfalls: Vec<Shortfall>,
}

impl GateVerdict {
    /// Build a verdict from shortfalls.
    pub fn from_shortfalls(shortfalls: Vec<Shortfall>) -> Self {
        Self {
            passed: shortfalls.is_empty(),
            shortfalls,
        }
    }

    /// Process exit code for this verdict.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

/// Compare a sample against every key of the threshold table.
///
/// Modules missing from the sample count as 0%.
///
/// # Example
///
/// ```
/// use qgate::coverage::{evaluate, CoverageSample, ThresholdTable};
///
/// let sample: CoverageSample = [("models", 85), ("overall", 78)].into_iter().collect();
/// let verdict = evaluate(&sample, &ThresholdTable::default());
///
/// assert!(!verdict.passed);
/// assert_eq!(verdict.shortfalls.len(), 4);
/// ```
pub fn evaluate(sample: &CoverageSample, thresholds: &ThresholdTable) -> GateVerdict {
    let shortfalls = thresholds
        .iter()
        .filter_map(|(module, target)| {
            let actual = sample.get(module).unwrap_or(0);
            (actual < target).then(|| Shortfall {
                module: module.to_string(),
                actual,
                target,
            })
        })
        .collect();

    GateVerdict::from_shortfalls(shortfalls)
}

/// A parsed sample together with the table it was judged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Outcome of the comparison.
    #[serde(flatten)]
    pub verdict: GateVerdict,
    /// Measured coverage.
    pub sample: CoverageSample,
    /// Targets used.
    pub thresholds: ThresholdTable,
}

impl CoverageReport {
    /// Evaluate `sample` against `thresholds` and keep both for reporting.
    pub fn new(sample: CoverageSample, thresholds: ThresholdTable) -> Self {
        let verdict = evaluate(&sample, &thresholds);
        Self {
            verdict,
            sample,
            thresholds,
        }
    }
}
