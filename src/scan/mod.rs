//! Error message scanning.
//!
//! Flags vague error messages (`"Error"`, `"Invalid"`, bare status codes)
//! in source files and attaches a remediation hint to each occurrence.
//!
//! - [`SignatureRule`] / [`RuleSet`] - Patterns and their hints
//! - [`Classifier`] - Applies rules to one document's text
//! - [`Scanner`] - Walks files and directories and collects findings
//!
//! # Example
//!
//! ```
//! use qgate::scan::{Classifier, RuleSet};
//!
//! let classifier = Classifier::new(RuleSet::builtin());
//! let findings = classifier.classify("users.py", "abort(400, \"Bad request\")");
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].rule, "generic-bad-request");
//! ```

pub mod classifier;
pub mod finding;
pub mod rule;
pub mod walker;

pub use classifier::{is_comment_line, Classifier};
pub use finding::ScanFinding;
pub use rule::{
    resembles_good_message, RuleSet, SignatureRule, BUILTIN_RULES, KNOWN_GOOD_PATTERNS,
};
pub use walker::{
    discover_documents, ScanOptions, ScanReport, ScanTarget, Scanner, DEFAULT_EXCLUDES,
    DEFAULT_EXTENSIONS,
};
