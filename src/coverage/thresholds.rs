//! Coverage threshold tables.
//!
//! A [`ThresholdTable`] maps module keys to minimum coverage percentages.
//! Order matters: shortfalls are reported in table order, so the table keeps
//! keys in the order they were configured.

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use super::sample::OVERALL_KEY;
use crate::error::{GateError, Result};

/// Default targets: (module, minimum percent).
pub const DEFAULT_THRESHOLDS: &[(&str, u8)] = &[
    ("models", 90),
    ("routes", 80),
    ("utils", 100),
    (OVERALL_KEY, 80),
];

/// Ordered module → target percentage table.
///
/// # Example
///
/// ```
/// use qgate::coverage::ThresholdTable;
///
/// let mut table = ThresholdTable::default();
/// table.set("models", 95);
/// table.set("services", 70);
///
/// let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec!["models", "routes", "utils", "overall", "services"]);
/// assert_eq!(table.get("models"), Some(95));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdTable {
    entries: Vec<(String, u8)>,
}

impl ThresholdTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a target, clamped to 100. Existing keys keep their position.
    pub fn set(&mut self, module: impl Into<String>, target: u8) {
        let module = module.into();
        let target = target.min(100);
        match self.entries.iter_mut().find(|(k, _)| *k == module) {
            Some(entry) => entry.1 = target,
            None => self.entries.push((module, target)),
        }
    }

    /// Target for a module, if configured.
    pub fn get(&self, module: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(k, _)| k == module)
            .map(|(_, t)| *t)
    }

    /// Apply every entry of `other` on top of this table.
    pub fn merge(&mut self, other: &ThresholdTable) {
        for (module, target) in other.iter() {
            self.set(module, target);
        }
    }

    /// Iterate in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), *t))
    }

    /// Number of configured targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        DEFAULT_THRESHOLDS.iter().copied().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, u8)> for ThresholdTable {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (module, target) in iter {
            table.set(module, target);
        }
        table
    }
}

/// Parse a `module=percent` override as given on the command line.
pub fn parse_override(raw: &str) -> Result<(String, u8)> {
    let invalid = |message: String| GateError::ConfigValidationError { message };

    let (module, target) = raw
        .split_once('=')
        .ok_or_else(|| invalid(format!("threshold '{}' must look like module=percent", raw)))?;

    let module = module.trim();
    if module.is_empty() {
        return Err(invalid(format!("threshold '{}' is missing a module name", raw)));
    }

    let digits = target.trim().trim_end_matches('%');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("threshold '{}' has a non-numeric target", raw)));
    }

    match digits.parse::<u32>() {
        Ok(target) if target <= 100 => Ok((module.to_string(), target as u8)),
        _ => Err(invalid(format!(
            "threshold '{}' must be between 0 and 100",
            raw
        ))),
    }
}

impl Serialize for ThresholdTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (module, target) in &self.entries {
            map.serialize_entry(module, target)?;
        }
        map.end()
    }
}

struct ThresholdTableVisitor;

impl<'de> Visitor<'de> for ThresholdTableVisitor {
    type Value = ThresholdTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of module names to percentages between 0 and 100")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> std::result::Result<Self::Value, M::Error> {
        let mut table = ThresholdTable::empty();
        while let Some((module, target)) = access.next_entry::<String, u32>()? {
            if target > 100 {
                return Err(de::Error::custom(format!(
                    "threshold for '{}' is {}, must be between 0 and 100",
                    module, target
                )));
            }
            table.set(module, target as u8);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for ThresholdTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ThresholdTableVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_in_configured_order() {
        let table = ThresholdTable::default();
        let entries: Vec<(&str, u8)> = table.iter().collect();

        assert_eq!(
            entries,
            vec![("models", 90), ("routes", 80), ("utils", 100), ("overall", 80)]
        );
    }

    #[test]
    fn set_replaces_in_place() {
        let mut table = ThresholdTable::default();
        table.set("routes", 60);

        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["models", "routes", "utils", "overall"]);
        assert_eq!(table.get("routes"), Some(60));
    }

    #[test]
    fn set_clamps_to_hundred() {
        let mut table = ThresholdTable::empty();
        table.set("models", 150);
        assert_eq!(table.get("models"), Some(100));
    }

    #[test]
    fn merge_overrides_and_appends() {
        let mut table = ThresholdTable::default();
        let overrides: ThresholdTable = [("overall", 85), ("services", 70)].into_iter().collect();
        table.merge(&overrides);

        assert_eq!(table.len(), 5);
        assert_eq!(table.get("overall"), Some(85));
        assert_eq!(table.iter().last(), Some(("services", 70)));
    }

    #[test]
    fn deserializes_preserving_order() {
        let table: ThresholdTable = serde_yaml::from_str("zeta: 10\nalpha: 20\nmid: 30\n").unwrap();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn deserialize_rejects_out_of_range_targets() {
        let result: std::result::Result<ThresholdTable, _> = serde_yaml::from_str("models: 101\n");
        assert!(result.is_err());
    }

    #[test]
    fn serializes_as_map() {
        let table: ThresholdTable = [("models", 90), ("overall", 80)].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"models":90,"overall":80}"#);
    }

    #[test]
    fn parses_overrides() {
        assert_eq!(parse_override("models=95").unwrap(), ("models".to_string(), 95));
        assert_eq!(parse_override(" overall = 85% ").unwrap(), ("overall".to_string(), 85));
    }

    #[test]
    fn rejects_malformed_overrides() {
        assert!(parse_override("models").is_err());
        assert!(parse_override("=90").is_err());
        assert!(parse_override("models=high").is_err());
        assert!(parse_override("models=101").is_err());
        assert!(parse_override("models=-1").is_err());
    }

    #[test]
    fn out_of_range_overrides_name_the_range() {
        for raw in ["models=101", "models=300", "models=99999999999"] {
            let err = parse_override(raw).unwrap_err().to_string();
            assert!(err.contains("between 0 and 100"), "{}: {}", raw, err);
        }

        let err = parse_override("models=high").unwrap_err().to_string();
        assert!(err.contains("non-numeric"));
    }

    #[test]
    fn out_of_range_config_names_the_range() {
        let err = serde_yaml::from_str::<ThresholdTable>("models: 300\n").unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));
    }
}
