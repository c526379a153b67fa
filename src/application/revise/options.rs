//! Revision Options
//!
//! Configuration types for a revisioning pass.

use std::path::PathBuf;

use crate::config::{Config, MissingReferencePolicy};
use crate::domain::value_objects::IntegrityAlgorithm;

/// Options for the revision use case
#[derive(Debug, Clone)]
pub struct RevisionOptions {
    /// Output root directory (mutated in place)
    pub root: PathBuf,
    /// Manifest file name, relative to `root`
    pub manifest: String,
    /// Token length in hex chars
    pub hash_length: usize,
    /// Files left out of the pass
    pub exclude: Vec<String>,
    /// Files rewritten but not renamed
    pub keep_names: Vec<String>,
    /// Extensions of text assets scanned for references
    pub rewrite_extensions: Vec<String>,
    /// Handling of references to assets that do not exist
    pub missing_references: MissingReferencePolicy,
    /// One integrity string per algorithm in each manifest entry
    pub algorithms: Vec<IntegrityAlgorithm>,
    /// Delete stale targets of a previous pass
    pub prune_stale: bool,
    /// Plan only (don't touch the tree)
    pub dry_run: bool,
}

impl RevisionOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(&Config::default()).with_root(root)
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            root: config.output.root.clone(),
            manifest: config.output.manifest.clone(),
            hash_length: config.revision.hash_length,
            exclude: config.revision.exclude.clone(),
            keep_names: config.revision.keep_names.clone(),
            rewrite_extensions: config.references.extensions.clone(),
            missing_references: config.references.missing,
            algorithms: config.integrity.algorithms.clone(),
            prune_stale: config.revision.prune_stale,
            dry_run: false,
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    pub fn with_hash_length(mut self, hash_length: usize) -> Self {
        self.hash_length = hash_length;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_keep_names(mut self, patterns: Vec<String>) -> Self {
        self.keep_names = patterns;
        self
    }

    pub fn with_missing_references(mut self, policy: MissingReferencePolicy) -> Self {
        self.missing_references = policy;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<IntegrityAlgorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_prune_stale(mut self, prune: bool) -> Self {
        self.prune_stale = prune;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Location of the manifest file
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }
}

impl Default for RevisionOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
