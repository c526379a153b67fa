#![no_main]

use assetrev::infrastructure::repositories::{parse_manifest, render_manifest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whatever parses must render and parse back to the same manifest
    if let Ok(manifest) = parse_manifest(data) {
        let rendered = render_manifest(&manifest);
        let reparsed = parse_manifest(rendered.as_bytes()).expect("rendered manifest parses");
        assert_eq!(manifest, reparsed);
    }
});
