//! Configuration schema definitions for qgate.
//!
//! These structs map to the `.qgate/config.yml` file format. Every field has
//! a default, so an empty or missing file yields the built-in behavior.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::coverage::{
    CoverageParser, CoverageRunner, ThresholdTable, DEFAULT_INSTALL_HINT, DEFAULT_PROGRAM,
    DEFAULT_SOURCE_ROOT,
};
use crate::error::Result;
use crate::scan::{
    Classifier, RuleSet, ScanOptions, Scanner, SignatureRule, DEFAULT_EXCLUDES,
    DEFAULT_EXTENSIONS,
};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Error message scan settings
    pub scan: ScanSettings,

    /// Coverage gate settings
    pub coverage: CoverageSettings,
}

/// Settings for `qgate scan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// File extensions scanned when walking a directory
    pub extensions: Vec<String>,

    /// Path substrings skipped when walking a directory
    pub exclude: Vec<String>,

    /// Extra rules applied after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleConfig>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            rules: Vec::new(),
        }
    }
}

impl ScanSettings {
    /// Document selection options.
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.extensions.clone(),
            exclude: self.exclude.clone(),
        }
    }

    /// Built-in rules plus configured extras.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let custom = self
            .rules
            .iter()
            .map(|r| SignatureRule::new(&r.name, &r.pattern, &r.remediation))
            .collect::<Result<Vec<_>>>()?;

        Ok(RuleSet::with_builtins_and_custom(custom))
    }

    /// Scanner configured from these settings.
    pub fn scanner(&self) -> Result<Scanner> {
        Ok(Scanner::new(Classifier::new(self.rule_set()?), self.options()))
    }
}

/// A user-defined signature rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Rule identifier shown in reports
    pub name: String,

    /// Regex, matched case-insensitively
    pub pattern: String,

    /// Hint shown with each finding
    pub remediation: String,
}

/// Settings for `qgate coverage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageSettings {
    /// Package whose modules are measured (`<root>/<module>/...`)
    pub source_root: String,

    /// Test runner program
    pub command: String,

    /// Runner arguments; derived from `source_root` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Shown when the runner is not installed
    pub install_hint: String,

    /// Minimum coverage per module, applied over the defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdTable>,
}

impl Default for CoverageSettings {
    fn default() -> Self {
        Self {
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
            command: DEFAULT_PROGRAM.to_string(),
            args: None,
            install_hint: DEFAULT_INSTALL_HINT.to_string(),
            thresholds: None,
        }
    }
}

impl CoverageSettings {
    /// Default thresholds with configured values applied on top.
    pub fn threshold_table(&self) -> ThresholdTable {
        let mut table = ThresholdTable::default();
        if let Some(configured) = &self.thresholds {
            table.merge(configured);
        }
        table
    }

    /// Output parser for the configured source root.
    pub fn parser(&self) -> CoverageParser {
        CoverageParser::new(&self.source_root)
    }

    /// Runner invocation, optionally restricted to one module.
    pub fn runner(&self, module: Option<String>, cwd: &Path) -> CoverageRunner {
        CoverageRunner {
            program: self.command.clone(),
            base_args: self.args.clone(),
            source_root: self.source_root.clone(),
            module: None,
            cwd: None,
            install_hint: self.install_hint.clone(),
        }
        .with_module(module)
        .with_cwd(cwd)
    }
}
