//! Property tests for fingerprinting.

use proptest::prelude::*;

use assetrev::domain::services::Fingerprinter;
use assetrev::{AssetPath, ContentHash};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,10}").unwrap()
}

fn asset_path() -> impl Strategy<Value = AssetPath> {
    (
        proptest::collection::vec(segment(), 0..=3),
        segment(),
        proptest::option::of("[a-z]{1,5}"),
    )
        .prop_map(|(dirs, stem, ext)| {
            let name = match ext {
                Some(ext) => format!("{}.{}", stem, ext),
                None => stem,
            };
            let mut segments = dirs;
            segments.push(name);
            AssetPath::parse(&segments.join("/")).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Same path and content always give the same name.
    #[test]
    fn property_fingerprint_is_deterministic(
        path in asset_path(),
        content in proptest::collection::vec(any::<u8>(), 0..256),
        length in 8usize..=64,
    ) {
        let fp = Fingerprinter::new(length);
        let a = fp.fingerprint(&path, &ContentHash::from_bytes(&content));
        let b = fp.fingerprint(&path, &ContentHash::from_bytes(&content));
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: Different content gives a different name.
    #[test]
    fn property_fingerprint_is_change_sensitive(
        path in asset_path(),
        a in proptest::collection::vec(any::<u8>(), 0..128),
        b in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        prop_assume!(a != b);
        let fp = Fingerprinter::default();
        prop_assert_ne!(
            fp.fingerprint(&path, &ContentHash::from_bytes(&a)),
            fp.fingerprint(&path, &ContentHash::from_bytes(&b))
        );
    }

    /// PROPERTY: Fingerprinting keeps the directory and the last extension,
    /// and embeds exactly `hash_length` hex chars.
    #[test]
    fn property_fingerprint_shape(
        path in asset_path(),
        content in proptest::collection::vec(any::<u8>(), 0..64),
        length in 8usize..=64,
    ) {
        let digest = ContentHash::from_bytes(&content);
        let target = Fingerprinter::new(length).fingerprint(&path, &digest);

        prop_assert_eq!(target.dir(), path.dir());
        prop_assert_eq!(target.extension(), path.extension());
        let token = format!("-{}", digest.token(length));
        prop_assert!(target.file_name().contains(&token));
        prop_assert_eq!(
            target.file_name().len(),
            path.file_name().len() + token.len()
        );
    }
}
