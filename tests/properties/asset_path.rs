//! Property tests for logical path normalization.

use proptest::prelude::*;

use assetrev::AssetPath;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}(\\.[a-z]{1,4})?").unwrap()
}

fn clean_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = AssetPath::parse(&s);
    }

    /// PROPERTY: A parsed path is a fixed point of parsing and has no
    /// empty, `.` or `..` segments.
    #[test]
    fn property_parse_is_normalized(s in "[a-z./\\\\]{0,48}") {
        if let Some(path) = AssetPath::parse(&s) {
            prop_assert_eq!(AssetPath::parse(path.as_str()), Some(path.clone()));
            prop_assert!(!path.as_str().starts_with('/'));
            for seg in path.as_str().split('/') {
                prop_assert!(!seg.is_empty() && seg != "." && seg != "..");
            }
        }
    }

    /// PROPERTY: Leading `/`, `./` and doubled separators do not change a path.
    #[test]
    fn property_decorations_are_ignored(path in clean_path()) {
        let plain = AssetPath::parse(&path).unwrap();
        prop_assert_eq!(AssetPath::parse(&format!("/{}", path)), Some(plain.clone()));
        prop_assert_eq!(AssetPath::parse(&format!("./{}", path)), Some(plain.clone()));
        prop_assert_eq!(AssetPath::parse(&path.replace('/', "//")), Some(plain.clone()));
        prop_assert_eq!(plain.root_relative(), format!("/{}", path));
    }

    /// PROPERTY: Swapping the file name keeps the directory.
    #[test]
    fn property_with_file_name_keeps_dir(path in clean_path(), name in segment()) {
        let original = AssetPath::parse(&path).unwrap();
        let renamed = original.with_file_name(&name);
        prop_assert_eq!(renamed.dir(), original.dir());
        prop_assert_eq!(renamed.file_name(), name.as_str());
    }
}
