//! Reference scanning and rewriting
//!
//! Finds occurrences of other assets' paths inside a text asset and replaces
//! them with fingerprinted names. Only the final file-name segment of a
//! reference is replaced; fingerprinting never moves a file to another
//! directory, so `../img/logo.png?v=2` becomes `../img/logo-3f9a1b2e.png?v=2`.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::AssetPath;

/// Candidate tokens: runs of characters that can appear in a URL path.
/// JSON may escape the separator as `\/`.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:[^\s"'`()<>\[\]{},;=|\\]|\\/)+"#).expect("token pattern is valid")
});

/// One occurrence of another asset's path inside a text asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Byte range of the file-name segment to replace
    pub span: Range<usize>,
    /// Logical path of the referenced asset
    pub target: AssetPath,
}

/// References found in one asset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Resolved references, in text order
    pub references: Vec<Reference>,
    /// Path-like tokens that resolved to no asset
    pub unresolved: Vec<String>,
}

impl ScanResult {
    /// Distinct assets referenced
    pub fn dependencies(&self) -> BTreeSet<AssetPath> {
        self.references.iter().map(|r| r.target.clone()).collect()
    }
}

/// Scans text for references to a known set of logical paths.
#[derive(Debug)]
pub struct ReferenceScanner<'a> {
    known: &'a BTreeSet<AssetPath>,
    aliases: Option<&'a BTreeMap<AssetPath, AssetPath>>,
    extensions: BTreeSet<&'a str>,
}

impl<'a> ReferenceScanner<'a> {
    /// Create a scanner over the assets of one pass
    pub fn new(known: &'a BTreeSet<AssetPath>) -> Self {
        let extensions = known.iter().filter_map(|p| p.extension()).collect();
        Self {
            known,
            aliases: None,
            extensions,
        }
    }

    /// Also resolve the fingerprinted names of a previous pass
    /// (fingerprinted path → logical path).
    pub fn with_aliases(mut self, aliases: &'a BTreeMap<AssetPath, AssetPath>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Find every reference in `text`, which is the content of `asset`.
    ///
    /// Self-references are ignored: a file cannot embed its own hash.
    pub fn scan(&self, asset: &AssetPath, text: &str) -> ScanResult {
        let mut result = ScanResult::default();

        for m in TOKEN.find_iter(text) {
            let raw = m.as_str();
            let token = unescape_slashes(raw);
            if is_external(&token) {
                continue;
            }

            // The file name follows the last `/`, escaped or not
            let path_len = raw.find(['?', '#']).unwrap_or(raw.len());
            let raw_path = &raw[..path_len];
            if raw_path.is_empty() || raw_path.ends_with('/') {
                continue;
            }
            let path_part = unescape_slashes(raw_path);

            let name_start = raw_path.rfind('/').map(|i| i + 1).unwrap_or(0);
            let name = &raw_path[name_start..];

            match self.resolve(asset, &path_part) {
                Some((_, target)) if &target == asset => {}
                Some((matched, target)) if matched.file_name() == name => {
                    result.references.push(Reference {
                        span: m.start() + name_start..m.start() + path_len,
                        target,
                    });
                }
                Some(_) => {}
                None => {
                    if self.looks_like_asset(name) {
                        result.unresolved.push(path_part.to_string());
                    }
                }
            }
        }

        result
    }

    /// Resolve a reference as the browser would, then fall back to the root.
    ///
    /// Returns the path the text names and the logical asset it stands for.
    fn resolve(&self, asset: &AssetPath, path_part: &str) -> Option<(AssetPath, AssetPath)> {
        if let Some(rooted) = path_part.strip_prefix('/') {
            return AssetPath::parse(rooted).and_then(|p| self.lookup(p));
        }

        asset
            .resolve_relative(path_part)
            .and_then(|p| self.lookup(p))
            .or_else(|| AssetPath::parse(path_part).and_then(|p| self.lookup(p)))
    }

    fn lookup(&self, path: AssetPath) -> Option<(AssetPath, AssetPath)> {
        if self.known.contains(&path) {
            return Some((path.clone(), path));
        }
        let logical = self.aliases?.get(&path)?.clone();
        Some((path, logical))
    }

    fn looks_like_asset(&self, name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => self.extensions.contains(ext),
            _ => false,
        }
    }
}

fn unescape_slashes(token: &str) -> Cow<'_, str> {
    if token.contains("\\/") {
        Cow::Owned(token.replace("\\/", "/"))
    } else {
        Cow::Borrowed(token)
    }
}

/// URLs with a scheme or a host point outside the tree.
fn is_external(token: &str) -> bool {
    if token.starts_with("//") || token.starts_with('#') {
        return true;
    }
    match token.find(':') {
        Some(colon) => {
            let scheme = &token[..colon];
            !scheme.is_empty()
                && !scheme.contains('/')
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Replace each reference's file name with its target's fingerprinted name.
///
/// References whose target is not in `targets` are left unmodified.
pub fn rewrite_references(
    text: &str,
    references: &[Reference],
    targets: &BTreeMap<AssetPath, AssetPath>,
) -> String {
    let mut out = String::with_capacity(text.len() + references.len() * 16);
    let mut last = 0;

    for reference in references {
        if let Some(target) = targets.get(&reference.target) {
            out.push_str(&text[last..reference.span.start]);
            out.push_str(target.file_name());
            last = reference.span.end;
        }
    }

    out.push_str(&text[last..]);
    out
}
