use std::path::{Path, PathBuf};

use anyhow::Result;
use assetrev::{JsonManifestRepository, LocalFs, VerifyOptions, VerifyReport, VerifyUseCase};

pub fn cmd_verify(config_path: Option<&Path>, root: Option<PathBuf>, json: bool) -> Result<()> {
    let loaded = super::load_config(config_path, json)?;
    let root = loaded.output_root(root);
    let options = VerifyOptions::new(&root, loaded.config.output.manifest.clone());

    if !json {
        println!("🔍 assetrev verify");
        println!("Manifest: {}", options.manifest_path().display());
        println!();
    }

    let use_case = VerifyUseCase::new(LocalFs::new(), JsonManifestRepository::new());
    let report = use_case.execute(&options)?;

    if json {
        println!("{}", serde_json::to_string(&json_event(&report))?);
    } else {
        for issue in &report.issues {
            println!("  ✗ {}", issue);
        }
        if !report.issues.is_empty() {
            println!();
        }
        println!(
            "Summary: {} entries checked, {} issues",
            report.checked,
            report.issues.len()
        );
        if report.is_clean() {
            println!("🟢 Manifest matches the output tree.");
        } else {
            println!("🔴 Verification failed.");
        }
    }

    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

fn json_event(report: &VerifyReport) -> serde_json::Value {
    let issues: Vec<_> = report
        .issues
        .iter()
        .map(|issue| {
            serde_json::json!({
                "kind": issue.kind(),
                "asset": issue.logical().as_str(),
                "message": issue.to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "event": "verify",
        "status": if report.is_clean() { "success" } else { "failed" },
        "checked": report.checked,
        "issues": issues,
    })
}
