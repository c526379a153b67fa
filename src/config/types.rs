//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{DEFAULT_HASH_LENGTH, MAX_HASH_LENGTH, MIN_HASH_LENGTH};
use crate::domain::value_objects::IntegrityAlgorithm;
use crate::error::{RevError, RevResult};

use super::loader::{self, ConfigWarning};

/// Output tree configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the upstream build writes into
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Manifest file name, relative to `root`
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            manifest: default_manifest(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_manifest() -> String {
    "assets.json".to_string()
}

/// Fingerprinting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionConfig {
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,

    /// Gitignore-style patterns of files left out of the pass entirely
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Patterns of files whose references are rewritten but whose name is kept
    #[serde(default)]
    pub keep_names: Vec<String>,

    /// Delete previous-pass targets that are no longer current
    #[serde(default = "default_true")]
    pub prune_stale: bool,
}

impl Default for RevisionConfig {
    fn default() -> Self {
        Self {
            hash_length: default_hash_length(),
            exclude: default_exclude(),
            keep_names: Vec::new(),
            prune_stale: true,
        }
    }
}

fn default_hash_length() -> usize {
    DEFAULT_HASH_LENGTH
}

fn default_exclude() -> Vec<String> {
    ["*.map", "*.html", "*.gz", "*.br"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

/// What to do with path-like tokens that resolve to no asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingReferencePolicy {
    Ignore,
    #[default]
    Warn,
}

impl MissingReferencePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Reference rewriting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencesConfig {
    /// Extensions of text assets scanned for references
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub missing: MissingReferencePolicy,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            missing: MissingReferencePolicy::default(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    [
        "css",
        "js",
        "mjs",
        "html",
        "htm",
        "svg",
        "json",
        "webmanifest",
        "xml",
        "txt",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Integrity configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityConfig {
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<IntegrityAlgorithm>,
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            algorithms: default_algorithms(),
        }
    }
}

fn default_algorithms() -> Vec<IntegrityAlgorithm> {
    vec![IntegrityAlgorithm::Sha256]
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub revision: RevisionConfig,

    #[serde(default)]
    pub references: ReferencesConfig,

    #[serde(default)]
    pub integrity: IntegrityConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RevResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RevResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `assetrev.toml` from the project root if present, else defaults,
    /// then apply environment overrides
    pub fn load_or_default(project_root: &Path) -> RevResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ASSETREV_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Check value ranges
    pub fn validate(&self) -> RevResult<()> {
        let hash_length = self.revision.hash_length;
        if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&hash_length) {
            return Err(RevError::InvalidConfig(format!(
                "revision.hash_length must be between {} and {}, got {}",
                MIN_HASH_LENGTH, MAX_HASH_LENGTH, hash_length
            )));
        }

        if self.integrity.algorithms.is_empty() {
            return Err(RevError::InvalidConfig(
                "integrity.algorithms must name at least one algorithm".to_string(),
            ));
        }

        let manifest = Path::new(&self.output.manifest);
        let escapes = manifest
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)));
        if self.output.manifest.is_empty() || escapes {
            return Err(RevError::InvalidConfig(format!(
                "output.manifest must be a relative path inside the output root, got '{}'",
                self.output.manifest
            )));
        }

        Ok(())
    }
}
