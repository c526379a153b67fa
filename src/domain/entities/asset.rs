//! Asset entity - a built file in the output tree
//!
//! Assets are produced by upstream build steps (bundler, style compiler,
//! image optimizers). The revisioning pass reads them, rewrites their
//! references, and gives each a content-derived name.

use crate::domain::value_objects::{AssetPath, ContentHash, Integrity, IntegrityAlgorithm};

/// A built file awaiting revisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Stable logical path (as produced upstream)
    path: AssetPath,
    /// File the bytes were read from
    ///
    /// Equals `path` unless the asset was adopted from a previous pass's
    /// fingerprinted output.
    origin: AssetPath,
    /// Raw bytes
    content: Vec<u8>,
}

impl Asset {
    /// Create an asset read from its own logical path
    pub fn new(path: AssetPath, content: impl Into<Vec<u8>>) -> Self {
        Self {
            origin: path.clone(),
            path,
            content: content.into(),
        }
    }

    /// Create an asset whose bytes were read from a previous pass's output
    pub fn adopted(path: AssetPath, origin: AssetPath, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path,
            origin,
            content: content.into(),
        }
    }

    /// Logical path
    pub fn path(&self) -> &AssetPath {
        &self.path
    }

    /// On-disk origin path
    pub fn origin(&self) -> &AssetPath {
        &self.origin
    }

    /// Whether the bytes came from a previous pass's output
    pub fn is_adopted(&self) -> bool {
        self.origin != self.path
    }

    /// Raw bytes
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8 text, if it is valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Finalize this asset with rewritten content and its target path
    pub fn revise(self, content: Vec<u8>, target: AssetPath) -> RevisedAsset {
        let digest = ContentHash::from_bytes(&content);
        RevisedAsset {
            logical: self.path,
            origin: self.origin,
            target,
            content,
            digest,
        }
    }
}

/// An asset whose references are rewritten and whose name is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisedAsset {
    logical: AssetPath,
    origin: AssetPath,
    target: AssetPath,
    content: Vec<u8>,
    digest: ContentHash,
}

impl RevisedAsset {
    /// Logical path
    pub fn logical(&self) -> &AssetPath {
        &self.logical
    }

    /// File the original bytes were read from
    pub fn origin(&self) -> &AssetPath {
        &self.origin
    }

    /// Fingerprinted path
    pub fn target(&self) -> &AssetPath {
        &self.target
    }

    /// Final bytes (post-rewrite)
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// SHA-256 of the final bytes
    pub fn digest(&self) -> &ContentHash {
        &self.digest
    }

    /// Whether materializing should remove the origin file
    pub fn supersedes_origin(&self) -> bool {
        self.origin != self.target
    }

    /// Integrity strings of the final bytes, one per algorithm
    pub fn integrity(&self, algorithms: &[IntegrityAlgorithm]) -> Vec<Integrity> {
        algorithms
            .iter()
            .map(|&algorithm| match algorithm {
                IntegrityAlgorithm::Sha256 => self.digest.integrity(),
                other => Integrity::compute(other, &self.content),
            })
            .collect()
    }
}
