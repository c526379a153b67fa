//! Error types for assetrev
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, ManifestError};
use crate::domain::services::CycleError;
use crate::domain::value_objects::PatternError;

/// Result type alias for revisioning operations
pub type RevResult<T> = Result<T, RevError>;

/// Main error type for revisioning operations
#[derive(Error, Debug)]
pub enum RevError {
    /// Output root does not exist or is not a directory
    #[error("output root not found: {}", .path.display())]
    RootNotFound { path: PathBuf },

    /// File name is not valid UTF-8 and cannot be named in the manifest
    #[error("unsupported file name (not UTF-8): {}", .path.display())]
    UnsupportedFileName { path: PathBuf },

    /// A built file could not be read
    #[error("failed to read asset {}: {source}", .path.display())]
    ReadAsset {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Writing a fingerprinted file (or removing its original) failed
    #[error("failed to materialize '{logical}' at {}: {source}", .destination.display())]
    Materialize {
        logical: String,
        destination: PathBuf,
        #[source]
        source: FsError,
    },

    /// Removing a stale fingerprinted file from a previous pass failed
    #[error("failed to prune stale file {}: {source}", .path.display())]
    Prune {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Assets reference each other in a loop
    #[error(transparent)]
    ReferenceCycle(#[from] CycleError),

    /// Existing manifest could not be parsed
    #[error("malformed manifest {}: {message}", .path.display())]
    MalformedManifest { path: PathBuf, message: String },

    /// Manifest could not be read or written
    #[error("manifest I/O error at {}: {source}", .path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Manifest file is required but absent
    #[error("manifest not found: {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Config values are out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Exclude or keep-name pattern failed to compile
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ManifestError> for RevError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Malformed { path, message } => {
                RevError::MalformedManifest { path, message }
            }
            ManifestError::Io { path, source } => RevError::ManifestIo { path, source },
        }
    }
}
