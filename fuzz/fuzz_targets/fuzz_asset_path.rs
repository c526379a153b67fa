#![no_main]

use assetrev::AssetPath;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(path) = AssetPath::parse(s) {
            // Normalized paths are fixed points of parsing
            assert_eq!(AssetPath::parse(path.as_str()), Some(path.clone()));
            assert!(!path.as_str().starts_with('/'));
            assert!(!path.as_str().split('/').any(|seg| seg == ".." || seg == "." || seg.is_empty()));
            let _ = path.resolve_relative(s);
        }
    }
});
