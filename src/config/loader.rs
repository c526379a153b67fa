//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RevError, RevResult};

use super::types::{Config, MissingReferencePolicy};

/// Config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "assetrev.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RevResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RevError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RevError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the project config, or defaults; env overrides applied last
pub fn load_or_default(project_root: &Path) -> RevResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(CONFIG_FILE_NAME);
    if project_config.is_file() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((with_env_overrides(config), warnings));
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (ASSETREV_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ASSETREV_ROOT
    if let Ok(root) = std::env::var("ASSETREV_ROOT") {
        if !root.is_empty() {
            config.output.root = PathBuf::from(root);
        }
    }

    // ASSETREV_MANIFEST
    if let Ok(manifest) = std::env::var("ASSETREV_MANIFEST") {
        if !manifest.is_empty() {
            config.output.manifest = manifest;
        }
    }

    // ASSETREV_HASH_LENGTH
    if let Ok(value) = std::env::var("ASSETREV_HASH_LENGTH") {
        match value.trim().parse() {
            Ok(len) => config.revision.hash_length = len,
            Err(_) => tracing::warn!(value = %value, "ignoring non-numeric ASSETREV_HASH_LENGTH"),
        }
    }

    // ASSETREV_MISSING_REFERENCES
    if let Ok(value) = std::env::var("ASSETREV_MISSING_REFERENCES") {
        match MissingReferencePolicy::parse(&value) {
            Some(policy) => config.references.missing = policy,
            None => tracing::warn!(value = %value, "ignoring unknown ASSETREV_MISSING_REFERENCES"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "root",
        "manifest",
        "revision",
        "hash_length",
        "exclude",
        "keep_names",
        "prune_stale",
        "references",
        "extensions",
        "missing",
        "integrity",
        "algorithms",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
