//! Configuration loading and parsing for qgate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use qgate::config::load_merged_config;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".qgate")).unwrap();
//! fs::write(
//!     temp.path().join(".qgate/config.yml"),
//!     "coverage:\n  thresholds:\n    overall: 85\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.coverage.threshold_table().get("overall"), Some(85));
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.qgate/config.yml`)
//! 2. Local overrides (`.qgate/config.local.yml`)
//!
//! `--config <file>` replaces discovery with a single file.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_config, load_config_value, load_merged_config, ConfigPaths, CONFIG_DIR};
pub use merger::{deep_merge, merge_configs};
pub use schema::{CoverageSettings, GateConfig, RuleConfig, ScanSettings};
