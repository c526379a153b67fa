//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port using the `assets.json` layout:
//!
//! ```json
//! {
//!   "/css/app.css": {
//!     "target": "/css/app-9f86d081.css",
//!     "sri": ["sha256-n4bQgYhMfWWaL+qgxVrQFaO/TxsrC4Is0V1sFbDwCgg="]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Manifest, ManifestEntry};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::manifest_repository::{
    ManifestError, ManifestRepository, ManifestResult,
};
use crate::domain::value_objects::{AssetPath, Integrity};
use crate::infrastructure::fs::LocalFs;

/// JSON-based manifest repository
pub struct JsonManifestRepository<F: FileSystem = LocalFs> {
    fs: F,
}

impl JsonManifestRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonManifestRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> JsonManifestRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

/// JSON representation of one entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonManifestEntry {
    target: String,
    #[serde(default)]
    sri: Vec<String>,
}

/// Render a manifest in its on-disk form: pretty JSON, sorted keys,
/// trailing newline.
pub fn render_manifest(manifest: &Manifest) -> String {
    let entries: BTreeMap<String, JsonManifestEntry> = manifest
        .entries()
        .map(|(logical, entry)| {
            (
                logical.root_relative(),
                JsonManifestEntry {
                    target: entry.target().root_relative(),
                    sri: entry
                        .sri()
                        .iter()
                        .map(|i| i.to_string())
                        .chain(entry.invalid_sri().iter().cloned())
                        .collect(),
                },
            )
        })
        .collect();

    // A map of strings cannot fail to serialize
    let mut content = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "{}".to_string());
    content.push('\n');
    content
}

/// Parse the on-disk form back into a manifest.
///
/// Unparseable integrity strings are kept aside on their entry rather than
/// failing the whole manifest, so verification can report them.
pub fn parse_manifest(content: &[u8]) -> Result<Manifest, String> {
    let entries: BTreeMap<String, JsonManifestEntry> =
        serde_json::from_slice(content).map_err(|e| e.to_string())?;

    let mut manifest = Manifest::new();
    for (key, entry) in entries {
        let logical =
            AssetPath::parse(&key).ok_or_else(|| format!("invalid asset path '{}'", key))?;
        let target = AssetPath::parse(&entry.target)
            .ok_or_else(|| format!("invalid target '{}' for '{}'", entry.target, key))?;
        let mut sri = Vec::new();
        let mut invalid = Vec::new();
        for value in entry.sri {
            match Integrity::parse(&value) {
                Ok(integrity) => sri.push(integrity),
                Err(_) => invalid.push(value),
            }
        }
        manifest.insert(logical, ManifestEntry::new(target, sri).with_invalid_sri(invalid));
    }

    Ok(manifest)
}

impl<F: FileSystem> ManifestRepository for JsonManifestRepository<F> {
    fn load(&self, path: &Path) -> ManifestResult<Option<Manifest>> {
        let content = match self.fs.read(path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(source) => {
                return Err(ManifestError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        parse_manifest(&content)
            .map(Some)
            .map_err(|message| ManifestError::Malformed {
                path: path.to_path_buf(),
                message,
            })
    }

    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()> {
        self.fs
            .write(path, render_manifest(manifest).as_bytes())
            .map_err(|source| ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}
