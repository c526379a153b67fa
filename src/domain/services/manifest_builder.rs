//! Manifest assembly
//!
//! Entries are recorded one at a time, after the corresponding file is
//! safely on disk, so a manifest never names a target that was not written.

use crate::domain::entities::{Manifest, ManifestEntry, RevisedAsset};
use crate::domain::value_objects::IntegrityAlgorithm;

/// Collects manifest entries for one revisioning pass.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    algorithms: Vec<IntegrityAlgorithm>,
    manifest: Manifest,
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new(vec![IntegrityAlgorithm::Sha256])
    }
}

impl ManifestBuilder {
    /// Create a builder emitting one integrity string per algorithm
    pub fn new(algorithms: Vec<IntegrityAlgorithm>) -> Self {
        Self {
            algorithms,
            manifest: Manifest::new(),
        }
    }

    pub fn algorithms(&self) -> &[IntegrityAlgorithm] {
        &self.algorithms
    }

    /// Record a materialized asset
    pub fn record(&mut self, asset: &RevisedAsset) {
        let entry = ManifestEntry::new(asset.target().clone(), asset.integrity(&self.algorithms));
        self.manifest.insert(asset.logical().clone(), entry);
    }

    pub fn len(&self) -> usize {
        self.manifest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifest.is_empty()
    }

    pub fn finish(self) -> Manifest {
        self.manifest
    }
}
