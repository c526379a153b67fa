//! Path fingerprinting service
//!
//! Inserts a content-derived token before the last extension of a file name:
//! `css/app.css` → `css/app-8f3a1c2d.css`.

use crate::domain::value_objects::{AssetPath, ContentHash, PathPatterns};

/// Default number of hex chars in the token
pub const DEFAULT_HASH_LENGTH: usize = 8;

/// Shortest token that still keeps collisions negligible
pub const MIN_HASH_LENGTH: usize = 8;

/// Full SHA-256 hex length
pub const MAX_HASH_LENGTH: usize = 64;

/// Computes fingerprinted paths.
///
/// The result depends only on the logical path and the digest of the final
/// content, so unchanged assets keep their name across builds.
#[derive(Debug)]
pub struct Fingerprinter {
    hash_length: usize,
    keep_names: PathPatterns,
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_LENGTH)
    }
}

impl Fingerprinter {
    /// Create a fingerprinter with the given token length (clamped to 8..=64)
    pub fn new(hash_length: usize) -> Self {
        Self {
            hash_length: hash_length.clamp(MIN_HASH_LENGTH, MAX_HASH_LENGTH),
            keep_names: PathPatterns::empty(),
        }
    }

    /// Paths matching `patterns` keep their logical name
    pub fn with_keep_names(mut self, patterns: PathPatterns) -> Self {
        self.keep_names = patterns;
        self
    }

    /// Token length in hex chars
    pub fn hash_length(&self) -> usize {
        self.hash_length
    }

    /// Whether `path` keeps its logical name
    pub fn keeps_name(&self, path: &AssetPath) -> bool {
        self.keep_names.matches(path)
    }

    /// Fingerprinted path of `path` whose final content hashes to `digest`
    pub fn fingerprint(&self, path: &AssetPath, digest: &ContentHash) -> AssetPath {
        if self.keeps_name(path) {
            return path.clone();
        }

        let token = digest.token(self.hash_length);
        let file_name = path.file_name();
        let fingerprinted = match path.extension() {
            Some(ext) => {
                let stem = &file_name[..file_name.len() - ext.len() - 1];
                format!("{}-{}.{}", stem, token, ext)
            }
            None => format!("{}-{}", file_name, token),
        };

        path.with_file_name(&fingerprinted)
    }
}
