//! Scan target discovery and multi-document scanning.
//!
//! A target is either a single file or a directory. Directories are walked
//! recursively; only files with a configured extension are scanned, and any
//! path containing an excluded substring is skipped. Unreadable documents
//! contribute no findings.

use glob::glob;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::classifier::Classifier;
use super::finding::ScanFinding;
use crate::error::{GateError, Result};

/// Extensions scanned when walking a directory.
pub const DEFAULT_EXTENSIONS: &[&str] = &["py", "js", "ts", "jsx", "tsx", "java", "go", "rs"];

/// Path substrings excluded from directory scans (test files and migrations).
pub const DEFAULT_EXCLUDES: &[&str] = &["test", "migration"];

/// Which documents a directory scan visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Case-sensitive substrings; a path containing any of them is skipped.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanOptions {
    /// Whether a path is excluded by substring policy.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.exclude.iter().any(|s| path.contains(s.as_str()))
    }

    /// Whether a path has one of the scanned extensions.
    pub fn has_scanned_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.trim_start_matches('.') == ext))
    }
}

/// What a scan resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// A single file, scanned as given.
    File(PathBuf),
    /// A directory, walked recursively.
    Directory(PathBuf),
}

impl ScanTarget {
    /// Resolve a path to a scan target.
    pub fn resolve(path: &Path) -> Result<Self> {
        if path.is_file() {
            Ok(Self::File(path.to_path_buf()))
        } else if path.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else {
            Err(GateError::TargetNotFound {
                path: path.to_path_buf(),
            })
        }
    }

    /// Documents to scan for this target, in deterministic order.
    pub fn documents(&self, options: &ScanOptions) -> Vec<PathBuf> {
        match self {
            Self::File(path) => vec![path.clone()],
            Self::Directory(dir) => discover_documents(dir, options),
        }
    }
}

/// Walk `dir` and return every scannable, non-excluded file, sorted by path.
pub fn discover_documents(dir: &Path, options: &ScanOptions) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/**/*",
        glob::Pattern::escape(&dir.to_string_lossy())
    );

    let entries = match glob(&pattern) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Invalid scan pattern {}: {}", pattern, e);
            return Vec::new();
        }
    };

    let mut documents: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .filter(|p| options.has_scanned_extension(p))
        .filter(|p| {
            let excluded = options.is_excluded(p);
            if excluded {
                tracing::debug!("Skipping excluded path {}", p.display());
            }
            !excluded
        })
        .collect();

    documents.sort();
    documents
}

/// Result of scanning a target.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Findings in (file, line, rule) order.
    pub findings: Vec<ScanFinding>,
    /// Number of documents visited.
    pub documents: usize,
}

impl ScanReport {
    /// Whether the scan found nothing.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Scans files and directories with a [`Classifier`].
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    classifier: Classifier,
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner.
    pub fn new(classifier: Classifier, options: ScanOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    /// Scan a file or directory.
    ///
    /// Documents are classified in parallel; findings keep document order.
    pub fn scan(&self, target: &Path) -> Result<ScanReport> {
        let target = ScanTarget::resolve(target)?;
        let documents = target.documents(&self.options);
        tracing::debug!("Scanning {} document(s)", documents.len());

        let findings = documents
            .par_iter()
            .map(|doc| self.scan_document(doc))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        Ok(ScanReport {
            findings,
            documents: documents.len(),
        })
    }

    /// Scan a single document. Read or decode failures yield no findings.
    pub fn scan_document(&self, path: &Path) -> Vec<ScanFinding> {
        match fs::read_to_string(path) {
            Ok(content) => self
                .classifier
                .classify(&path.display().to_string(), &content),
            Err(e) => {
                tracing::debug!("Skipping unreadable {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }
}
