//! Revision Use Case
//!
//! Orchestrates one revisioning pass over an output tree:
//! 1. Load the previous manifest (if any)
//! 2. Collect assets, adopting previous outputs whose original is gone
//! 3. Scan text assets for references and order assets by dependency
//! 4. Rewrite, hash, and fingerprint each asset in that order
//! 5. Materialize targets, prune stale ones
//! 6. Save the manifest
//!
//! Business rules live in domain services; this module only wires them to
//! the file system and manifest ports.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::config::MissingReferencePolicy;
use crate::domain::entities::{Asset, Manifest, RevisedAsset};
use crate::domain::ports::{FileSystem, ManifestRepository};
use crate::domain::services::{
    rewrite_references, DependencyGraph, Fingerprinter, ManifestBuilder, ReferenceScanner,
    ScanResult,
};
use crate::domain::value_objects::{AssetPath, ContentHash, PathPatterns};
use crate::error::{RevError, RevResult};

use super::materializer::TreeMaterializer;
use super::options::RevisionOptions;
use super::result::{MissingReference, RevisionResult};

/// Assets of one pass, keyed by logical path
struct Inventory {
    assets: BTreeMap<AssetPath, Asset>,
    /// Previous fingerprinted path → logical path, for current assets only
    aliases: BTreeMap<AssetPath, AssetPath>,
    /// Previous targets that no longer belong to any asset
    stale: BTreeSet<AssetPath>,
}

/// Revision use case - runs a revisioning pass
///
/// Parameterized by its ports so tests can run it against an in-memory
/// file system.
pub struct RevisionUseCase<F, R>
where
    F: FileSystem,
    R: ManifestRepository,
{
    file_system: F,
    manifests: R,
}

impl<F, R> RevisionUseCase<F, R>
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

    /// Run a pass. On error, no manifest is written.
    pub fn execute(&self, options: &RevisionOptions) -> RevResult<RevisionResult> {
        let root = options.root.as_path();
        if !self.file_system.is_dir(root) {
            return Err(RevError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let exclude = PathPatterns::from_patterns(&options.exclude)?;
        let fingerprinter = Fingerprinter::new(options.hash_length)
            .with_keep_names(PathPatterns::from_patterns(&options.keep_names)?);
        let manifest_key = AssetPath::parse(&options.manifest).ok_or_else(|| {
            RevError::InvalidConfig(format!("invalid manifest path '{}'", options.manifest))
        })?;

        let manifest_path = options.manifest_path();
        let previous = self.manifests.load(&manifest_path)?.unwrap_or_default();
        let mut result = RevisionResult::new(manifest_path.clone(), options.dry_run);

        let inventory = self.collect(root, &exclude, &manifest_key, &previous)?;
        tracing::info!(
            root = %root.display(),
            assets = inventory.assets.len(),
            previous = previous.len(),
            dry_run = options.dry_run,
            "revisioning output tree"
        );
        result.adopted = inventory
            .assets
            .values()
            .filter(|a| a.is_adopted())
            .map(|a| a.path().clone())
            .collect();

        let revised = plan(&inventory, &fingerprinter, options, &mut result)?;
        let manifest = self.materialize(root, &revised, options, &mut result)?;

        // An unchanged asset rebuilt upstream maps to its previous target again
        let current: BTreeSet<&AssetPath> = revised.iter().map(|a| a.target()).collect();
        let stale: Vec<&AssetPath> = inventory
            .stale
            .iter()
            .filter(|p| !current.contains(p))
            .collect();
        self.prune(root, &stale, options, &mut result)?;

        if options.dry_run {
            tracing::info!(manifest = %manifest_path.display(), "dry run: manifest not written");
        } else {
            self.manifests.save(&manifest, &manifest_path)?;
            tracing::info!(
                manifest = %manifest_path.display(),
                entries = manifest.len(),
                "manifest written"
            );
        }

        result.manifest = manifest;
        Ok(result)
    }

    fn read_asset(&self, root: &Path, path: &AssetPath) -> RevResult<Vec<u8>> {
        let location = path.to_path(root);
        self.file_system
            .read(&location)
            .map_err(|source| RevError::ReadAsset {
                path: location,
                source,
            })
    }

    fn collect(
        &self,
        root: &Path,
        exclude: &PathPatterns,
        manifest_key: &AssetPath,
        previous: &Manifest,
    ) -> RevResult<Inventory> {
        let files = self
            .file_system
            .list_files(root)
            .map_err(|source| RevError::ReadAsset {
                path: root.to_path_buf(),
                source,
            })?;
        let present = files
            .iter()
            .map(|f| {
                AssetPath::from_relative_path(f)
                    .ok_or_else(|| RevError::UnsupportedFileName { path: root.join(f) })
            })
            .collect::<RevResult<BTreeSet<AssetPath>>>()?;
        let previous_targets = previous.renamed_targets();

        let mut inventory = Inventory {
            assets: BTreeMap::new(),
            aliases: BTreeMap::new(),
            stale: BTreeSet::new(),
        };

        for path in &present {
            if path == manifest_key || exclude.matches(path) {
                tracing::trace!(path = %path, "excluded");
                continue;
            }

            match previous_targets.get(path) {
                Some(&logical) if present.contains(logical) || exclude.matches(logical) => {
                    inventory.stale.insert(path.clone());
                }
                Some(&logical) => {
                    tracing::debug!(path = %path, logical = %logical, "adopting previous output");
                    let content = self.read_asset(root, path)?;
                    inventory
                        .assets
                        .insert(logical.clone(), Asset::adopted(logical.clone(), path.clone(), content));
                }
                None => {
                    let content = self.read_asset(root, path)?;
                    inventory
                        .assets
                        .insert(path.clone(), Asset::new(path.clone(), content));
                }
            }
        }

        // Text written by a previous pass names assets by their previous
        // fingerprinted path.
        for (target, logical) in previous_targets {
            if inventory.assets.contains_key(logical) {
                inventory.aliases.insert(target.clone(), logical.clone());
            }
        }

        Ok(inventory)
    }

    fn materialize(
        &self,
        root: &Path,
        revised: &[RevisedAsset],
        options: &RevisionOptions,
        result: &mut RevisionResult,
    ) -> RevResult<Manifest> {
        let claimed: BTreeSet<&AssetPath> = revised.iter().map(|a| a.target()).collect();
        let materializer = TreeMaterializer::new(&self.file_system, root);
        let mut builder = ManifestBuilder::new(options.algorithms.clone());

        for asset in revised {
            let keep_origin = claimed.contains(asset.origin());
            let outcome = if options.dry_run {
                materializer.preview(asset, keep_origin)
            } else {
                materializer.materialize(asset, keep_origin)?
            };

            if outcome.written {
                tracing::debug!(logical = %asset.logical(), target = %asset.target(), "wrote");
                result.written.push(asset.target().clone());
            } else {
                tracing::debug!(logical = %asset.logical(), target = %asset.target(), "unchanged");
                result.unchanged.push(asset.target().clone());
            }
            if outcome.removed_origin {
                result.removed.push(asset.origin().clone());
            }

            builder.record(asset);
        }

        Ok(builder.finish())
    }

    fn prune(
        &self,
        root: &Path,
        stale: &[&AssetPath],
        options: &RevisionOptions,
        result: &mut RevisionResult,
    ) -> RevResult<()> {
        for &path in stale {
            let location = path.to_path(root);
            if !options.prune_stale {
                tracing::info!(path = %path, "stale file kept (pruning disabled)");
                result.stale.push(path.clone());
                continue;
            }
            if options.dry_run {
                if self.file_system.exists(&location) {
                    result.pruned.push(path.clone());
                }
                continue;
            }

            match self.file_system.remove(&location) {
                Ok(()) => {
                    tracing::debug!(path = %path, "pruned stale file");
                    result.pruned.push(path.clone());
                }
                Err(e) if e.is_not_found() => {}
                Err(source) => {
                    return Err(RevError::Prune {
                        path: location,
                        source,
                    })
                }
            }
        }
        Ok(())
    }
}

/// Rewrite and fingerprint every asset, dependencies first.
fn plan(
    inventory: &Inventory,
    fingerprinter: &Fingerprinter,
    options: &RevisionOptions,
    result: &mut RevisionResult,
) -> RevResult<Vec<RevisedAsset>> {
    let known: BTreeSet<AssetPath> = inventory.assets.keys().cloned().collect();
    let scanner = ReferenceScanner::new(&known).with_aliases(&inventory.aliases);
    let rewritable: BTreeSet<String> = options
        .rewrite_extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
        .collect();

    let mut scans: BTreeMap<&AssetPath, ScanResult> = BTreeMap::new();
    let mut graph = DependencyGraph::new();

    for (path, asset) in &inventory.assets {
        graph.add_node(path.clone());

        let scannable = path
            .extension()
            .is_some_and(|ext| rewritable.contains(&ext.to_ascii_lowercase()));
        let Some(text) = asset.text().filter(|_| scannable) else {
            continue;
        };

        let scan = scanner.scan(path, text);
        for dependency in scan.dependencies() {
            graph.add_edge(path.clone(), dependency);
        }
        for reference in &scan.unresolved {
            match options.missing_references {
                MissingReferencePolicy::Warn => {
                    tracing::warn!(asset = %path, reference = %reference, "reference to missing asset left unchanged");
                    result.missing_references.push(MissingReference {
                        asset: path.clone(),
                        reference: reference.clone(),
                    });
                }
                MissingReferencePolicy::Ignore => {
                    tracing::debug!(asset = %path, reference = %reference, "reference to missing asset ignored");
                }
            }
        }
        scans.insert(path, scan);
    }

    let order = graph.topological_order()?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "dependency order resolved"
    );

    let mut targets: BTreeMap<AssetPath, AssetPath> = BTreeMap::new();
    let mut revised = Vec::with_capacity(order.len());

    for path in order {
        let Some(asset) = inventory.assets.get(&path) else {
            continue;
        };

        let content = match (scans.get(&path), asset.text()) {
            (Some(scan), Some(text)) if !scan.references.is_empty() => {
                rewrite_references(text, &scan.references, &targets).into_bytes()
            }
            _ => asset.content().to_vec(),
        };

        let target = fingerprinter.fingerprint(&path, &ContentHash::from_bytes(&content));
        targets.insert(path, target.clone());
        revised.push(asset.clone().revise(content, target));
    }

    Ok(revised)
}
