//! assetrev - content-addressed asset revisioning
//!
//! assetrev takes a tree of built web assets, rewrites the references between
//! them, renames every file after a hash of its final content and records the
//! mapping (with Subresource Integrity strings) in a JSON manifest.
//!
//! ## Architecture
//!
//! - `domain` - Pure logic: paths, hashes, fingerprints, reference scanning,
//!   dependency ordering and the manifest model
//! - `infrastructure` - File system and JSON manifest storage
//! - `application` - The revision pass and manifest verification
//! - `config` - `assetrev.toml` loading and environment overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    MissingReference, RevisionOptions, RevisionResult, RevisionUseCase, VerifyIssue,
    VerifyOptions, VerifyReport, VerifyUseCase,
};
pub use config::{Config, ConfigWarning, MissingReferencePolicy};
pub use domain::entities::{Manifest, ManifestEntry};
pub use domain::value_objects::{AssetPath, ContentHash, Integrity, IntegrityAlgorithm};
pub use error::{RevError, RevResult};
pub use infrastructure::{JsonManifestRepository, LocalFs};
