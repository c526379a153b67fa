//! Verify Use Case
//!
//! Checks a manifest against the tree it describes: every target exists,
//! every integrity string matches the target's bytes, and no original is
//! left next to its fingerprinted copy.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, ManifestRepository};
use crate::domain::value_objects::AssetPath;
use crate::error::{RevError, RevResult};

/// Options for the verify operation
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Output root directory
    pub root: PathBuf,
    /// Manifest file name, relative to `root`
    pub manifest: String,
}

impl VerifyOptions {
    pub fn new(root: impl Into<PathBuf>, manifest: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            manifest: manifest.into(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }
}

/// One problem found by verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyIssue {
    /// The fingerprinted file is gone
    MissingTarget { logical: AssetPath, target: AssetPath },
    /// The target's bytes no longer hash to the recorded value
    IntegrityMismatch {
        logical: AssetPath,
        target: AssetPath,
        expected: String,
    },
    /// A recorded integrity string cannot be checked
    InvalidIntegrity { logical: AssetPath, value: String },
    /// The entry records no integrity at all
    NoIntegrity { logical: AssetPath },
    /// The original still exists and differs from its target
    DanglingOriginal { logical: AssetPath, target: AssetPath },
}

impl VerifyIssue {
    /// Logical path of the offending entry
    pub fn logical(&self) -> &AssetPath {
        match self {
            Self::MissingTarget { logical, .. }
            | Self::IntegrityMismatch { logical, .. }
            | Self::InvalidIntegrity { logical, .. }
            | Self::NoIntegrity { logical }
            | Self::DanglingOriginal { logical, .. } => logical,
        }
    }

    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingTarget { .. } => "missing_target",
            Self::IntegrityMismatch { .. } => "integrity_mismatch",
            Self::InvalidIntegrity { .. } => "invalid_integrity",
            Self::NoIntegrity { .. } => "no_integrity",
            Self::DanglingOriginal { .. } => "dangling_original",
        }
    }
}

impl fmt::Display for VerifyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget { logical, target } => {
                write!(f, "{}: target {} is missing", logical, target)
            }
            Self::IntegrityMismatch {
                logical,
                target,
                expected,
            } => write!(f, "{}: {} does not match {}", logical, target, expected),
            Self::InvalidIntegrity { logical, value } => {
                write!(f, "{}: unsupported integrity '{}'", logical, value)
            }
            Self::NoIntegrity { logical } => write!(f, "{}: no integrity recorded", logical),
            Self::DanglingOriginal { logical, target } => {
                write!(f, "{}: original still present next to {}", logical, target)
            }
        }
    }
}

/// Result of the verify operation
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    /// Number of manifest entries checked
    pub checked: usize,
    /// Problems found
    pub issues: Vec<VerifyIssue>,
}

impl VerifyReport {
    /// No problems found
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Verify Use Case
pub struct VerifyUseCase<F, R>
where
    F: FileSystem,
    R: ManifestRepository,
{
    file_system: F,
    manifests: R,
}

impl<F, R> VerifyUseCase<F, R>
where
    F: FileSystem,
    R: ManifestRepository,
{
    pub fn new(file_system: F, manifests: R) -> Self {
        Self {
            file_system,
            manifests,
        }
    }

    /// Execute the verify operation
    pub fn execute(&self, options: &VerifyOptions) -> RevResult<VerifyReport> {
        let root = options.root.as_path();
        let manifest_path = options.manifest_path();
        let manifest = self
            .manifests
            .load(&manifest_path)?
            .ok_or(RevError::ManifestNotFound {
                path: manifest_path.clone(),
            })?;

        let mut report = VerifyReport::default();
        for (logical, entry) in manifest.entries() {
            report.checked += 1;
            self.check_entry(root, logical, entry, &mut report.issues)?;
        }

        tracing::info!(
            manifest = %manifest_path.display(),
            checked = report.checked,
            issues = report.issues.len(),
            "verified manifest"
        );
        Ok(report)
    }

    fn check_entry(
        &self,
        root: &Path,
        logical: &AssetPath,
        entry: &crate::domain::entities::ManifestEntry,
        issues: &mut Vec<VerifyIssue>,
    ) -> RevResult<()> {
        let target = entry.target();

        for value in entry.invalid_sri() {
            issues.push(VerifyIssue::InvalidIntegrity {
                logical: logical.clone(),
                value: value.clone(),
            });
        }
        if entry.sri().is_empty() && entry.invalid_sri().is_empty() {
            issues.push(VerifyIssue::NoIntegrity {
                logical: logical.clone(),
            });
        }

        let location = target.to_path(root);
        let content = match self.file_system.read(&location) {
            Ok(content) => Some(content),
            Err(e) if e.is_not_found() => None,
            Err(source) => {
                return Err(RevError::ReadAsset {
                    path: location,
                    source,
                })
            }
        };

        // A copy identical to its target is harmless
        if target != logical {
            let original = logical.to_path(root);
            match self.file_system.read(&original) {
                Ok(bytes) if content.as_deref() == Some(bytes.as_slice()) => {}
                Ok(_) => issues.push(VerifyIssue::DanglingOriginal {
                    logical: logical.clone(),
                    target: target.clone(),
                }),
                Err(e) if e.is_not_found() => {}
                Err(source) => {
                    return Err(RevError::ReadAsset {
                        path: original,
                        source,
                    })
                }
            }
        }

        let Some(content) = content else {
            issues.push(VerifyIssue::MissingTarget {
                logical: logical.clone(),
                target: target.clone(),
            });
            return Ok(());
        };

        for integrity in entry.sri() {
            if !integrity.matches(&content) {
                tracing::debug!(logical = %logical, integrity = %integrity, "integrity mismatch");
                issues.push(VerifyIssue::IntegrityMismatch {
                    logical: logical.clone(),
                    target: target.clone(),
                    expected: integrity.to_string(),
                });
            }
        }
        Ok(())
    }
}
