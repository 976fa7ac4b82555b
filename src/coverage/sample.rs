//! Coverage output parsing.
//!
//! Test runner output is free text. Two line shapes are recognised:
//!
//! - `<root>/<module>/... <n>%` - per-module coverage, keyed by `<module>`
//! - `TOTAL ... <n>%` - aggregate coverage, stored under [`OVERALL_KEY`]
//!
//! Everything else is ignored, so truncated or malformed output simply
//! yields fewer keys.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Reserved key for aggregate coverage.
pub const OVERALL_KEY: &str = "overall";

/// Package root used when none is configured.
pub const DEFAULT_SOURCE_ROOT: &str = "app";

static RE_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TOTAL.*?([0-9]+)%").expect("total pattern compiles"));

/// Measured coverage per module for one test run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CoverageSample {
    modules: BTreeMap<String, u8>,
}

impl CoverageSample {
    /// Create an empty sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a percentage, clamped to 100. Replaces any earlier value.
    pub fn insert(&mut self, module: impl Into<String>, percent: u32) {
        let percent = percent.min(100) as u8;
        self.modules.insert(module.into(), percent);
    }

    /// Coverage for a module, if measured.
    pub fn get(&self, module: &str) -> Option<u8> {
        self.modules.get(module).copied()
    }

    /// Aggregate coverage, if measured.
    pub fn overall(&self) -> Option<u8> {
        self.get(OVERALL_KEY)
    }

    /// Iterate measured modules in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.modules.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of measured keys.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for CoverageSample {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut sample = Self::new();
        for (module, percent) in iter {
            sample.insert(module, percent);
        }
        sample
    }
}

/// Extracts a [`CoverageSample`] from test runner output.
///
/// # Example
///
/// ```
/// use qgate::coverage::CoverageParser;
///
/// let sample = CoverageParser::default().parse("app/models/user.py 85%\nTOTAL 78%");
///
/// assert_eq!(sample.get("models"), Some(85));
/// assert_eq!(sample.overall(), Some(78));
/// ```
#[derive(Debug, Clone)]
pub struct CoverageParser {
    module_re: Regex,
}

impl CoverageParser {
    /// Create a parser for modules under `source_root`.
    pub fn new(source_root: &str) -> Self {
        let pattern = format!(r"{}/(\w+)/.*?([0-9]+)%", regex::escape(source_root));
        let module_re = Regex::new(&pattern).expect("escaped module pattern compiles");
        Self { module_re }
    }

    /// Parse runner output.
    ///
    /// A later line for the same module overwrites an earlier one, since
    /// runners often print per-file rows before package rollups. The first
    /// `TOTAL` line carrying a percentage provides the aggregate.
    pub fn parse(&self, output: &str) -> CoverageSample {
        let mut sample = CoverageSample::new();
        let mut overall = None;

        for line in output.lines() {
            if let Some(caps) = self.module_re.captures(line) {
                sample.insert(&caps[1], parse_percent(&caps[2]));
            }

            if overall.is_none() {
                overall = RE_TOTAL.captures(line).map(|caps| parse_percent(&caps[1]));
            }
        }

        if let Some(percent) = overall {
            sample.insert(OVERALL_KEY, percent);
        }

        tracing::debug!("Parsed coverage sample: {:?}", sample);
        sample
    }
}

/// ASCII digits only; values too large for `u32` saturate and clamp later.
fn parse_percent(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

impl Default for CoverageParser {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PYTEST_OUTPUT: &str = "\
============================= test session starts ==============================
collected 42 items

tests/test_models/test_user.py ........                                  [ 19%]
tests/test_routes/test_auth.py ..........                                [ 42%]

---------- coverage: platform linux, python 3.12.1-final-0 -----------
Name                          Stmts   Miss  Cover   Missing
-----------------------------------------------------------
app/__init__.py                  12      0   100%
app/models/__init__.py            4      0   100%
app/models/user.py               50      8    84%   12-19
app/routes/auth.py               80     20    75%   40-59
app/utils/strings.py             10      0   100%
-----------------------------------------------------------
TOTAL                           156     28    82%

============================== 42 passed in 1.23s ==============================
";

    #[test]
    fn parses_module_and_total_lines() {
        let sample = CoverageParser::default().parse("app/models/user.py 85%\nTOTAL 78%");

        let expected: CoverageSample = [("models", 85), ("overall", 78)].into_iter().collect();
        assert_eq!(sample, expected);
    }

    #[test]
    fn later_module_lines_overwrite_earlier_ones() {
        let sample = CoverageParser::default().parse(PYTEST_OUTPUT);

        assert_eq!(sample.get("models"), Some(84));
        assert_eq!(sample.get("routes"), Some(75));
        assert_eq!(sample.get("utils"), Some(100));
        assert_eq!(sample.overall(), Some(82));
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn package_level_files_are_not_modules() {
        let sample = CoverageParser::default().parse("app/__init__.py   12   0   100%");
        assert!(sample.is_empty());
    }

    #[test]
    fn test_progress_lines_are_ignored() {
        let sample =
            CoverageParser::default().parse("tests/test_models/test_user.py ....   [ 19%]");
        assert!(sample.is_empty());
    }

    #[test]
    fn first_total_line_wins() {
        let sample = CoverageParser::default().parse("TOTAL 70%\nTOTAL 90%");
        assert_eq!(sample.overall(), Some(70));
    }

    #[test]
    fn total_without_percentage_is_skipped() {
        let sample = CoverageParser::default().parse("TOTAL pending\nTOTAL 10 2 80%");
        assert_eq!(sample.overall(), Some(80));
    }

    #[test]
    fn garbage_output_yields_empty_sample() {
        let sample = CoverageParser::default()
            .parse("Error: pytest not found. Install with: pip install pytest pytest-cov");
        assert!(sample.is_empty());
    }

    #[test]
    fn truncated_output_yields_partial_sample() {
        let sample = CoverageParser::default().parse("app/models/user.py 50 8 84%\napp/rou");
        assert_eq!(sample.len(), 1);
        assert_eq!(sample.get("models"), Some(84));
    }

    #[test]
    fn percentages_are_clamped() {
        let sample = CoverageParser::default().parse("app/models/user.py 250%");
        assert_eq!(sample.get("models"), Some(100));

        let sample =
            CoverageParser::default().parse("app/models/a.py 99999999999%\nTOTAL 99999999999%");
        assert_eq!(sample.get("models"), Some(100));
        assert_eq!(sample.overall(), Some(100));
    }

    #[test]
    fn non_ascii_digits_are_not_percentages() {
        let sample = CoverageParser::default().parse("app/models/a.py ٨٥%\nTOTAL ٧٨%");
        assert!(sample.is_empty());
    }

    #[test]
    fn custom_source_root() {
        let parser = CoverageParser::new("src/pkg");
        let sample = parser.parse("src/pkg/api/views.py 10 1 90%\napp/models/user.py 85%");

        assert_eq!(sample.get("api"), Some(90));
        assert_eq!(sample.get("models"), None);
    }

    #[test]
    fn parse_is_pure_across_calls() {
        let parser = CoverageParser::default();
        let first = parser.parse("app/models/a.py 10%");
        let second = parser.parse("app/routes/b.py 20%");

        assert_eq!(first.get("routes"), None);
        assert_eq!(second.get("models"), None);
    }
}
