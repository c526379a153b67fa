use std::path::{Path, PathBuf};

use anyhow::Result;
use assetrev::{
    AssetPath, JsonManifestRepository, LocalFs, RevisionOptions, RevisionResult, RevisionUseCase,
};

pub fn cmd_rev(
    config_path: Option<&Path>,
    root: Option<PathBuf>,
    dry_run: bool,
    no_prune: bool,
    json: bool,
) -> Result<()> {
    let loaded = super::load_config(config_path, json)?;
    let root = loaded.output_root(root);

    let mut options = RevisionOptions::from_config(&loaded.config)
        .with_root(&root)
        .with_dry_run(dry_run);
    if no_prune {
        options = options.with_prune_stale(false);
    }

    if !json {
        println!("🔖 assetrev");
        println!("Root: {}", root.display());
        if dry_run {
            println!("Mode: Dry run (no files will be changed)");
        }
    }

    let use_case = RevisionUseCase::new(LocalFs::new(), JsonManifestRepository::new());
    let result = use_case.execute(&options)?;

    if json {
        println!("{}", serde_json::to_string(&json_event(&result))?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn paths(list: &[AssetPath]) -> Vec<&str> {
    list.iter().map(AssetPath::as_str).collect()
}

fn json_event(result: &RevisionResult) -> serde_json::Value {
    let missing: Vec<_> = result
        .missing_references
        .iter()
        .map(|m| {
            serde_json::json!({
                "asset": m.asset.as_str(),
                "reference": m.reference,
            })
        })
        .collect();

    serde_json::json!({
        "event": "rev",
        "status": "success",
        "dry_run": result.dry_run,
        "assets": result.asset_count(),
        "written": paths(&result.written),
        "unchanged": paths(&result.unchanged),
        "removed": paths(&result.removed),
        "adopted": paths(&result.adopted),
        "pruned": paths(&result.pruned),
        "stale": paths(&result.stale),
        "missing_references": missing,
        "manifest": result.manifest_path.display().to_string(),
    })
}

fn print_result(result: &RevisionResult) {
    println!("\n📊 Revision Results:");
    if !result.written.is_empty() {
        println!("  ✓ Written: {} files", result.written.len());
        for path in &result.written {
            println!("    - {}", path);
        }
    }
    if !result.unchanged.is_empty() {
        println!("  ○ Unchanged: {} files", result.unchanged.len());
    }
    if !result.removed.is_empty() {
        println!("  ✗ Removed originals: {}", result.removed.len());
    }
    if !result.pruned.is_empty() {
        println!("  🧹 Pruned stale files: {}", result.pruned.len());
        for path in &result.pruned {
            println!("    - {}", path);
        }
    }
    if !result.stale.is_empty() {
        println!("  ⚠ Stale files kept: {}", result.stale.len());
    }
    for missing in &result.missing_references {
        println!(
            "  ⚠ Missing reference in {}: {}",
            missing.asset, missing.reference
        );
    }
    println!();

    if result.dry_run {
        println!(
            "Dry run: manifest with {} entries not written to {}",
            result.asset_count(),
            result.manifest_path.display()
        );
    } else if result.has_changes() {
        println!(
            "✓ Manifest: {} ({} entries)",
            result.manifest_path.display(),
            result.asset_count()
        );
    } else {
        println!("✓ Up to date ({} entries)", result.asset_count());
    }
}
