//! Line classification against a rule set.

use super::finding::ScanFinding;
use super::rule::RuleSet;

/// Markers that start a comment line once leading whitespace is stripped.
const COMMENT_MARKERS: &[&str] = &["#", "//"];

/// Check whether a line is a comment and must not be matched.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    COMMENT_MARKERS.iter().any(|m| trimmed.starts_with(m))
}

/// Applies a [`RuleSet`] to text and reports every match.
///
/// # Example
///
/// ```
/// use qgate::scan::Classifier;
///
/// let classifier = Classifier::default();
/// let findings = classifier.classify("app.py", "raise ValueError(\"Error\")\n# \"Error\"");
///
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].line, 1);
/// assert!(findings[0].remediation.contains("specific"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    /// Create a classifier with the given rules.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rules this classifier applies.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify `text`, attributing findings to `source`.
    ///
    /// Findings are ordered by line, then by rule definition order.
    pub fn classify(&self, source: &str, text: &str) -> Vec<ScanFinding> {
        let mut findings = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            if is_comment_line(line) {
                continue;
            }

            for rule in self.rules.iter().filter(|r| r.is_match(line)) {
                findings.push(ScanFinding {
                    file: source.to_string(),
                    line: idx + 1,
                    content: line.trim().to_string(),
                    rule: rule.name.clone(),
                    remediation: rule.remediation.clone(),
                });
            }
        }

        findings
    }
}
