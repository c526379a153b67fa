//! Manifest entity - maps logical asset paths to fingerprinted ones
//!
//! The manifest is a pure data structure. Reading and writing it is handled
//! by `ManifestRepository`.

use std::collections::BTreeMap;

use crate::domain::value_objects::{AssetPath, Integrity};

/// Manifest entry for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Fingerprinted path
    target: AssetPath,
    /// Integrity strings of the target's bytes
    sri: Vec<Integrity>,
    /// Integrity strings read from disk that could not be parsed
    invalid_sri: Vec<String>,
}

impl ManifestEntry {
    /// Create a new entry
    pub fn new(target: AssetPath, sri: Vec<Integrity>) -> Self {
        Self {
            target,
            sri,
            invalid_sri: Vec::new(),
        }
    }

    /// Attach integrity strings that failed to parse
    pub fn with_invalid_sri(mut self, invalid: Vec<String>) -> Self {
        self.invalid_sri = invalid;
        self
    }

    /// Fingerprinted path
    pub fn target(&self) -> &AssetPath {
        &self.target
    }

    /// Integrity strings
    pub fn sri(&self) -> &[Integrity] {
        &self.sri
    }

    pub fn invalid_sri(&self) -> &[String] {
        &self.invalid_sri
    }
}

/// Mapping of every revisioned asset in one pass.
///
/// Keys are unique logical paths. Iteration is sorted so the serialized
/// form diffs cleanly between builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<AssetPath, ManifestEntry>,
}

impl Manifest {
    /// Create a new empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the manifest is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert or replace the entry for `logical`
    pub fn insert(&mut self, logical: AssetPath, entry: ManifestEntry) {
        self.entries.insert(logical, entry);
    }

    /// Get the entry for a logical path
    pub fn get(&self, logical: &AssetPath) -> Option<&ManifestEntry> {
        self.entries.get(logical)
    }

    /// Iterate entries in sorted order
    pub fn entries(&self) -> impl Iterator<Item = (&AssetPath, &ManifestEntry)> {
        self.entries.iter()
    }

    /// Map of fingerprinted target → logical path, for entries that were renamed
    pub fn renamed_targets(&self) -> BTreeMap<&AssetPath, &AssetPath> {
        self.entries
            .iter()
            .filter(|(logical, entry)| entry.target() != *logical)
            .map(|(logical, entry)| (entry.target(), logical))
            .collect()
    }
}
