//! ManifestRepository port - abstraction for manifest persistence
//!
//! This trait allows the revisioning pass to load/save the manifest
//! without knowing about JSON serialization details.

use std::path::{Path, PathBuf};

use crate::domain::entities::Manifest;
use crate::domain::ports::FsError;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Existing manifest cannot be parsed
    #[error("malformed manifest {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },
    /// I/O error
    #[error("manifest I/O error: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

/// Abstract repository for manifest persistence
pub trait ManifestRepository {
    /// Load the manifest at `path`; `Ok(None)` if there is none yet
    fn load(&self, path: &Path) -> ManifestResult<Option<Manifest>>;

    /// Save the manifest to `path`
    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()>;
}
