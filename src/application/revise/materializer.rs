//! Tree Materializer
//!
//! Puts revised assets on disk: write the target, then retire the origin.

use std::path::Path;

use crate::domain::entities::RevisedAsset;
use crate::domain::ports::FileSystem;
use crate::error::{RevError, RevResult};

/// What happened to one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Materialized {
    /// The target was written (false: identical bytes were already there)
    pub written: bool,
    /// The origin file was deleted
    pub removed_origin: bool,
}

/// Writes revised assets under an output root.
pub struct TreeMaterializer<'a, F: FileSystem> {
    fs: &'a F,
    root: &'a Path,
}

impl<'a, F: FileSystem> TreeMaterializer<'a, F> {
    pub fn new(fs: &'a F, root: &'a Path) -> Self {
        Self { fs, root }
    }

    /// Write `asset`'s target and remove its origin.
    ///
    /// With `keep_origin`, the origin stays even if it differs from the
    /// target: it is another asset's target in this pass.
    pub fn materialize(&self, asset: &RevisedAsset, keep_origin: bool) -> RevResult<Materialized> {
        let destination = asset.target().to_path(self.root);

        let identical = matches!(self.fs.read(&destination), Ok(existing) if existing == asset.content());
        if !identical {
            self.fs
                .write(&destination, asset.content())
                .map_err(|source| RevError::Materialize {
                    logical: asset.logical().to_string(),
                    destination: destination.clone(),
                    source,
                })?;
        }

        let mut removed_origin = false;
        if asset.supersedes_origin() && !keep_origin {
            let origin = asset.origin().to_path(self.root);
            match self.fs.remove(&origin) {
                Ok(()) => removed_origin = true,
                Err(e) if e.is_not_found() => {}
                Err(source) => {
                    return Err(RevError::Materialize {
                        logical: asset.logical().to_string(),
                        destination: origin,
                        source,
                    })
                }
            }
        }

        Ok(Materialized {
            written: !identical,
            removed_origin,
        })
    }

    /// What `materialize` would do, without touching the tree
    pub fn preview(&self, asset: &RevisedAsset, keep_origin: bool) -> Materialized {
        let destination = asset.target().to_path(self.root);
        let identical = matches!(self.fs.read(&destination), Ok(existing) if existing == asset.content());
        let removes_origin = asset.supersedes_origin()
            && !keep_origin
            && self.fs.exists(&asset.origin().to_path(self.root));

        Materialized {
            written: !identical,
            removed_origin: removes_origin,
        }
    }
}
