//! Signature rules for low-quality error messages.
//!
//! A [`SignatureRule`] pairs a case-insensitive pattern with the remediation
//! hint shown when it matches. [`RuleSet`] is an ordered collection of rules;
//! the order is the order findings are reported in for a single line.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::error::{GateError, Result};

/// Built-in rules: (name, pattern, remediation).
///
/// Each pattern matches a double-quoted literal whose entire content is the
/// vague message. Single-quoted literals are left to custom rules.
pub const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    (
        "generic-error",
        r#""Error""#,
        r#"Generic "Error" - be specific about what failed"#,
    ),
    (
        "generic-invalid",
        r#""Invalid""#,
        r#"Generic "Invalid" - specify which field/value"#,
    ),
    (
        "generic-failed",
        r#""Failed""#,
        r#"Generic "Failed" - explain what failed and why"#,
    ),
    (
        "generic-bad-request",
        r#""Bad request""#,
        r#"Generic "Bad request" - explain what's wrong"#,
    ),
    (
        "vague-something-wrong",
        r#""Something went wrong""#,
        "Too vague - be specific",
    ),
    (
        "vague-try-again",
        r#""Please try again""#,
        "No context - explain what to try differently",
    ),
    (
        "http-code-only",
        r#""Error \d+""#,
        "HTTP code only - add human-readable message",
    ),
    (
        "status-code-only",
        r#""\d{3}""#,
        "Status code only - add context",
    ),
];

/// Phrases that indicate a well-written error message.
///
/// This list is a style reference for people writing messages and a fixture
/// for tests. The classifier never consults it: a line matching a built-in
/// rule is flagged even when it also contains one of these phrases.
pub const KNOWN_GOOD_PATTERNS: &[&str] = &[
    r"already (?:exists|registered)",
    r"must be",
    r"(?:Max|Maximum|Minimum|Min) \d+",
    r"expected.*got",
    r"cannot.*because",
    r"required",
    r"invalid format",
];

static KNOWN_GOOD: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KNOWN_GOOD_PATTERNS
        .iter()
        .filter_map(|p| RegexBuilder::new(p).case_insensitive(true).build().ok())
        .collect()
});

/// Check whether a message reads like one of the known-good examples.
///
/// Reference only; see [`KNOWN_GOOD_PATTERNS`].
pub fn resembles_good_message(text: &str) -> bool {
    KNOWN_GOOD.iter().any(|re| re.is_match(text))
}

/// A single pattern and its remediation hint.
#[derive(Debug, Clone)]
pub struct SignatureRule {
    /// Stable identifier shown in reports.
    pub name: String,
    /// Compiled, case-insensitive pattern.
    pub pattern: Regex,
    /// What the author should do instead.
    pub remediation: String,
}

impl SignatureRule {
    /// Compile a rule. Matching is always case-insensitive.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        remediation: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| GateError::InvalidPattern {
                rule: name.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            name,
            pattern,
            remediation: remediation.into(),
        })
    }

    /// Check whether this rule matches anywhere in `line`.
    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Ordered collection of signature rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<SignatureRule>,
}

impl RuleSet {
    /// Create a rule set from explicit rules.
    pub fn new(rules: Vec<SignatureRule>) -> Self {
        Self { rules }
    }

    /// The built-in rule set.
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(name, pattern, remediation)| {
                SignatureRule::new(*name, pattern, *remediation)
                    .expect("built-in rule patterns compile")
            })
            .collect();

        Self { rules }
    }

    /// Built-in rules followed by additional configured rules.
    pub fn with_builtins_and_custom(custom: Vec<SignatureRule>) -> Self {
        let mut set = Self::builtin();
        for rule in custom {
            set.add_rule(rule);
        }
        set
    }

    /// Append a rule after the existing ones.
    pub fn add_rule(&mut self, rule: SignatureRule) {
        self.rules.push(rule);
    }

    /// Iterate rules in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &SignatureRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
