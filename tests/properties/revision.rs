//! Property tests for whole revisioning passes over small random trees.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use assetrev::domain::ports::FileSystem;
use assetrev::{
    AssetPath, JsonManifestRepository, LocalFs, RevisionOptions, RevisionResult, RevisionUseCase,
};

/// Image names and contents, plus which images the stylesheet references
fn tree() -> impl Strategy<Value = (Vec<(String, Vec<u8>)>, Vec<bool>)> {
    proptest::collection::btree_map(
        "[a-z]{1,6}",
        proptest::collection::vec(any::<u8>(), 1..32),
        1..5,
    )
    .prop_flat_map(|images| {
        let n = images.len();
        (
            Just(images.into_iter().collect::<Vec<_>>()),
            proptest::collection::vec(any::<bool>(), n),
        )
    })
}

fn write_tree(root: &Path, images: &[(String, Vec<u8>)], referenced: &[bool]) {
    std::fs::create_dir_all(root.join("img")).unwrap();
    std::fs::create_dir_all(root.join("css")).unwrap();

    let mut css = String::from("body{}");
    for ((name, bytes), &used) in images.iter().zip(referenced) {
        std::fs::write(root.join("img").join(format!("{}.bin", name)), bytes).unwrap();
        if used {
            css.push_str(&format!(" .{}{{background:url(../img/{}.bin)}}", name, name));
        }
    }
    std::fs::write(root.join("css/app.css"), css).unwrap();
}

fn run(root: &Path) -> RevisionResult {
    RevisionUseCase::new(LocalFs::new(), JsonManifestRepository::new())
        .execute(&RevisionOptions::new(root))
        .unwrap()
}

fn snapshot(root: &Path) -> BTreeSet<(String, Vec<u8>)> {
    LocalFs::new()
        .list_files(root)
        .unwrap()
        .into_iter()
        .map(|p| {
            let content = std::fs::read(root.join(&p)).unwrap();
            (p.to_string_lossy().replace('\\', "/"), content)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Running a second pass over the output of the first changes
    /// nothing.
    #[test]
    fn property_second_pass_is_idempotent((images, referenced) in tree()) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("public");
        write_tree(&root, &images, &referenced);

        run(&root);
        let before = snapshot(&root);
        let second = run(&root);

        prop_assert!(second.written.is_empty(), "rewrote {:?}", second.written);
        prop_assert!(second.pruned.is_empty());
        prop_assert_eq!(snapshot(&root), before);
    }

    /// PROPERTY: Every manifest target exists, no original is left next to
    /// its target, and the stylesheet names its images by their final names.
    #[test]
    fn property_reference_integrity((images, referenced) in tree()) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("public");
        write_tree(&root, &images, &referenced);

        let result = run(&root);

        for (logical, entry) in result.manifest.entries() {
            prop_assert!(entry.target().to_path(&root).is_file());
            prop_assert!(!logical.to_path(&root).exists());
        }

        let css = result
            .manifest
            .get(&AssetPath::parse("css/app.css").unwrap())
            .unwrap();
        let text = std::fs::read_to_string(css.target().to_path(&root)).unwrap();
        for ((name, _), &used) in images.iter().zip(&referenced) {
            let logical = AssetPath::parse(&format!("img/{}.bin", name)).unwrap();
            let target = result.manifest.get(&logical).unwrap().target();
            let final_ref = format!("../{}", target.as_str());
            prop_assert_eq!(text.contains(&final_ref), used);
            let original_ref = format!("../img/{}.bin)", name);
            prop_assert!(!text.contains(&original_ref));
        }
    }
}
