//! Property tests for reference scanning and rewriting.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use assetrev::domain::services::{rewrite_references, ReferenceScanner};
use assetrev::AssetPath;

fn known() -> BTreeSet<AssetPath> {
    ["css/app.css", "img/logo.png", "js/app.js", "fonts/a.woff2"]
        .iter()
        .filter_map(|s| AssetPath::parse(s))
        .collect()
}

/// Text mixing filler with references written the ways stylesheets do
fn stylesheet() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        proptest::string::string_regex("[a-z{}:; ]{0,12}").unwrap(),
        Just("url(../img/logo.png)".to_string()),
        Just("url('/fonts/a.woff2?v=3#x')".to_string()),
        Just("url(\"../img/missing.png\")".to_string()),
        Just("url(https://cdn.example.com/img/logo.png)".to_string()),
    ];
    proptest::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Scanning and rewriting never panic on arbitrary text.
    #[test]
    fn property_scan_never_panics(text in "(?s).{0,256}") {
        let known = known();
        let scanner = ReferenceScanner::new(&known);
        let targets: BTreeMap<AssetPath, AssetPath> =
            known.iter().map(|p| (p.clone(), p.with_file_name("x.y"))).collect();

        for asset in &known {
            let scan = scanner.scan(asset, &text);
            let _ = rewrite_references(&text, &scan.references, &targets);
        }
    }

    /// PROPERTY: Mapping every asset to itself leaves text byte-identical.
    #[test]
    fn property_identity_rewrite_is_noop(text in stylesheet()) {
        let known = known();
        let scanner = ReferenceScanner::new(&known);
        let identity: BTreeMap<AssetPath, AssetPath> =
            known.iter().map(|p| (p.clone(), p.clone())).collect();

        let scan = scanner.scan(&AssetPath::parse("css/app.css").unwrap(), &text);

        prop_assert_eq!(rewrite_references(&text, &scan.references, &identity), text);
    }

    /// PROPERTY: After rewriting, no resolved reference names the old file.
    #[test]
    fn property_rewrite_replaces_every_reference(text in stylesheet()) {
        let known = known();
        let scanner = ReferenceScanner::new(&known);
        let asset = AssetPath::parse("css/app.css").unwrap();
        let targets: BTreeMap<AssetPath, AssetPath> = known
            .iter()
            .map(|p| (p.clone(), p.with_file_name(&format!("r-{}", p.file_name()))))
            .collect();

        let scan = scanner.scan(&asset, &text);
        let rewritten = rewrite_references(&text, &scan.references, &targets);
        let rescanned = ReferenceScanner::new(&known).scan(&asset, &rewritten);

        prop_assert!(rescanned.references.is_empty());
        prop_assert_eq!(
            rewritten.matches("r-logo.png").count(),
            text.matches("url(../img/logo.png)").count()
        );
        // External URLs and missing assets are untouched
        prop_assert_eq!(
            rewritten.matches("https://cdn.example.com/img/logo.png").count(),
            text.matches("https://cdn.example.com/img/logo.png").count()
        );
        prop_assert_eq!(
            rewritten.matches("missing.png").count(),
            text.matches("missing.png").count()
        );
    }
}
