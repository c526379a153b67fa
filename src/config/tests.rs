//! Tests for the config module

use super::types::*;
use super::CONFIG_FILE_NAME;
use crate::domain::value_objects::IntegrityAlgorithm;
use crate::error::RevError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.output.root, PathBuf::from("public"));
    assert_eq!(config.output.manifest, "assets.json");
    assert_eq!(config.revision.hash_length, 8);
    assert_eq!(config.revision.exclude, vec!["*.map", "*.html", "*.gz", "*.br"]);
    assert!(config.revision.keep_names.is_empty());
    assert!(config.revision.prune_stale);
    assert_eq!(config.references.missing, MissingReferencePolicy::Warn);
    assert!(config.references.extensions.contains(&"css".to_string()));
    assert_eq!(config.integrity.algorithms, vec![IntegrityAlgorithm::Sha256]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[output]
root = "dist"
manifest = "rev-manifest.json"

[revision]
hash_length = 12
exclude = ["*.map"]
keep_names = ["*.html", "robots.txt"]
prune_stale = false

[references]
extensions = ["css", "html"]
missing = "ignore"

[integrity]
algorithms = ["sha384", "sha512"]
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.output.root, PathBuf::from("dist"));
    assert_eq!(config.output.manifest, "rev-manifest.json");
    assert_eq!(config.revision.hash_length, 12);
    assert_eq!(config.revision.keep_names.len(), 2);
    assert!(!config.revision.prune_stale);
    assert_eq!(config.references.extensions, vec!["css", "html"]);
    assert_eq!(config.references.missing, MissingReferencePolicy::Ignore);
    assert_eq!(
        config.integrity.algorithms,
        vec![IntegrityAlgorithm::Sha384, IntegrityAlgorithm::Sha512]
    );
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[revision]\nhash_length = 10\n").unwrap();

    assert_eq!(config.revision.hash_length, 10);
    assert!(config.revision.prune_stale);
    assert_eq!(config.revision.exclude.len(), 4);
    assert_eq!(config.output.manifest, "assets.json");
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[integrity]\nalgorithms = [\"md5\"]\n");
    assert!(result.is_err());
}

#[test]
fn test_missing_policy_parse() {
    assert_eq!(
        MissingReferencePolicy::parse("IGNORE"),
        Some(MissingReferencePolicy::Ignore)
    );
    assert_eq!(
        MissingReferencePolicy::parse(" warn "),
        Some(MissingReferencePolicy::Warn)
    );
    assert_eq!(MissingReferencePolicy::parse("fail"), None);
}

#[test]
fn test_validate_hash_length_range() {
    let mut config = Config::default();
    config.revision.hash_length = 7;
    assert!(matches!(config.validate(), Err(RevError::InvalidConfig(_))));

    config.revision.hash_length = 65;
    assert!(config.validate().is_err());

    config.revision.hash_length = 64;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_requires_algorithm() {
    let mut config = Config::default();
    config.integrity.algorithms.clear();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("integrity.algorithms"));
}

#[test]
fn test_validate_manifest_stays_inside_root() {
    for bad in ["", "../assets.json", "/etc/assets.json", "./assets.json"] {
        let mut config = Config::default();
        config.output.manifest = bad.to_string();
        assert!(config.validate().is_err(), "accepted {:?}", bad);
    }

    let mut config = Config::default();
    config.output.manifest = "meta/assets.json".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_env_override_root() {
    // SAFETY: Single-threaded test, no concurrent access to env vars
    unsafe { std::env::set_var("ASSETREV_ROOT", "build/www") };
    let config = Config::default().with_env_overrides();
    assert_eq!(config.output.root, PathBuf::from("build/www"));
    unsafe { std::env::remove_var("ASSETREV_ROOT") };
}

#[test]
fn test_env_override_manifest() {
    // SAFETY: Single-threaded test, no concurrent access to env vars
    unsafe { std::env::set_var("ASSETREV_MANIFEST", "manifest.json") };
    let config = Config::default().with_env_overrides();
    assert_eq!(config.output.manifest, "manifest.json");
    unsafe { std::env::remove_var("ASSETREV_MANIFEST") };
}

#[test]
fn test_env_override_hash_length() {
    // SAFETY: Single-threaded test, no concurrent access to env vars
    unsafe { std::env::set_var("ASSETREV_HASH_LENGTH", "16") };
    let config = Config::default().with_env_overrides();
    assert_eq!(config.revision.hash_length, 16);
    unsafe { std::env::remove_var("ASSETREV_HASH_LENGTH") };
}

#[test]
fn test_env_override_missing_references() {
    // SAFETY: Single-threaded test, no concurrent access to env vars
    unsafe { std::env::set_var("ASSETREV_MISSING_REFERENCES", "ignore") };
    let config = Config::default().with_env_overrides();
    assert_eq!(config.references.missing, MissingReferencePolicy::Ignore);
    unsafe { std::env::remove_var("ASSETREV_MISSING_REFERENCES") };
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    fs::write(&path, "[revision]\nhash_lenght = 10\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.revision.hash_length, 8);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "hash_lenght");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("hash_length".to_string()));
}

#[test]
fn test_config_load_reports_syntax_error_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    fs::write(&path, "[revision\nhash_length = 10\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, RevError::Config { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();

    let (config, warnings) = Config::load_or_default(dir.path()).unwrap();

    assert!(warnings.is_empty());
    assert!(config.revision.prune_stale);
}

#[test]
fn test_load_or_default_reads_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[revision]\nprune_stale = false\nkeep_names = [\"*.html\"]\n",
    )
    .unwrap();

    let (config, _) = Config::load_or_default(dir.path()).unwrap();

    assert!(!config.revision.prune_stale);
    assert_eq!(config.revision.keep_names, vec!["*.html"]);
}
