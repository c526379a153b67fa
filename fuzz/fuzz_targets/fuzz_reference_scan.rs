#![no_main]

use std::collections::{BTreeMap, BTreeSet};

use assetrev::domain::services::{rewrite_references, ReferenceScanner};
use assetrev::AssetPath;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let known: BTreeSet<AssetPath> = ["css/app.css", "img/logo.png", "js/app.js", "index.html"]
        .iter()
        .filter_map(|s| AssetPath::parse(s))
        .collect();
    let targets: BTreeMap<AssetPath, AssetPath> = known
        .iter()
        .map(|p| (p.clone(), p.with_file_name(&format!("x-{}", p.file_name()))))
        .collect();

    let scanner = ReferenceScanner::new(&known);
    for asset in &known {
        let scan = scanner.scan(asset, text);
        // Spans must fall on char boundaries and never overlap
        let _ = rewrite_references(text, &scan.references, &targets);
    }
});
