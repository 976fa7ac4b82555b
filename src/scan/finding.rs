//! Scan findings.

use serde::Serialize;

/// One flagged occurrence of a low-quality error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFinding {
    /// Document the line came from.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
    /// Name of the rule that matched.
    pub rule: String,
    /// Remediation hint of the rule that matched.
    pub remediation: String,
}

impl ScanFinding {
    /// Location as `file:line`.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}
