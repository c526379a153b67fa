//! Revision Result
//!
//! Result types for a revisioning pass.

use std::path::PathBuf;

use crate::domain::entities::Manifest;
use crate::domain::value_objects::AssetPath;

/// A path-like token that named no asset; left unmodified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    /// Asset containing the token
    pub asset: AssetPath,
    /// The token as written
    pub reference: String,
}

/// Result of a revisioning pass
#[derive(Debug, Clone, Default)]
pub struct RevisionResult {
    /// Targets written (or that would be, in a dry run)
    pub written: Vec<AssetPath>,
    /// Targets already present with identical bytes
    pub unchanged: Vec<AssetPath>,
    /// Originals removed after their target was written
    pub removed: Vec<AssetPath>,
    /// Stale previous-pass targets deleted
    pub pruned: Vec<AssetPath>,
    /// Stale previous-pass targets left in place (pruning disabled)
    pub stale: Vec<AssetPath>,
    /// Assets adopted from a previous pass's output
    pub adopted: Vec<AssetPath>,
    /// Unresolved references (only under the `warn` policy)
    pub missing_references: Vec<MissingReference>,
    /// Manifest of this pass
    pub manifest: Manifest,
    /// Where the manifest was (or would be) written
    pub manifest_path: PathBuf,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl RevisionResult {
    pub fn new(manifest_path: PathBuf, dry_run: bool) -> Self {
        Self {
            manifest_path,
            dry_run,
            ..Self::default()
        }
    }

    /// Number of assets in the manifest
    pub fn asset_count(&self) -> usize {
        self.manifest.len()
    }

    pub fn has_changes(&self) -> bool {
        !self.written.is_empty() || !self.removed.is_empty() || !self.pruned.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.missing_references.is_empty()
    }
}
