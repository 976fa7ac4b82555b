//! Deep merge for layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively; existing keys keep their position
//! - Sequences are replaced entirely
//! - Null in the overlay removes the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge `overlay` onto `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge config layers in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn threshold_override_keeps_key_order() {
        let base = yaml("coverage:\n  thresholds:\n    models: 90\n    routes: 80\n");
        let overlay = yaml("coverage:\n  thresholds:\n    models: 95\n    utils: 100\n");

        let result = deep_merge(&base, &overlay);
        let keys: Vec<&str> = result["coverage"]["thresholds"]
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(|k| k.as_str())
            .collect();

        assert_eq!(keys, vec!["models", "routes", "utils"]);
        assert_eq!(result["coverage"]["thresholds"]["models"], 95);
    }

    #[test]
    fn sequences_are_replaced_not_merged() {
        let base = yaml("scan:\n  extensions: [py, js]\n");
        let overlay = yaml("scan:\n  extensions: [rs]\n");

        let result = deep_merge(&base, &overlay);
        let extensions = result["scan"]["extensions"].as_sequence().unwrap();

        assert_eq!(extensions.len(), 1);
        assert_eq!(extensions[0], "rs");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml("coverage:\n  command: tox\n  source_root: svc\n");
        let overlay = yaml("coverage:\n  command: null\n");

        let result = deep_merge(&base, &overlay);

        assert!(result["coverage"].get("command").is_none());
        assert_eq!(result["coverage"]["source_root"], "svc");
    }

    #[test]
    fn merge_configs_applies_layers_in_order() {
        let configs = vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let result = merge_configs(&configs);

        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 3);
        assert_eq!(result["c"], 5);
    }
}
