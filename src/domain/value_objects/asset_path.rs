//! Logical asset path value object
//!
//! Assets are identified by their path relative to the output root, always
//! with `/` separators and without `.`/`..` segments. The manifest stores the
//! root-relative form (`/css/app.css`).

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Normalized, root-relative logical path of an asset.
///
/// Never empty, never starts with `/`, never contains `.` or `..` segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPath(String);

impl AssetPath {
    /// Parse a logical path, normalizing separators and dot segments.
    ///
    /// Leading `/` is accepted and stripped. Returns `None` for an empty
    /// path or one that climbs above the root.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.replace('\\', "/");
        let mut segments: Vec<&str> = Vec::new();

        for segment in normalized.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop()?;
                }
                other => segments.push(other),
            }
        }

        if segments.is_empty() {
            return None;
        }
        Some(Self(segments.join("/")))
    }

    /// Build from a filesystem path relative to the output root.
    pub fn from_relative_path(path: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(s) => segments.push(s.to_str()?),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if segments.is_empty() {
            return None;
        }
        Some(Self(segments.join("/")))
    }

    /// Path string without leading `/`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Root-relative form used as manifest key/target (`/css/app.css`)
    pub fn root_relative(&self) -> String {
        format!("/{}", self.0)
    }

    /// Directory part (`""` for files at the root)
    pub fn dir(&self) -> &str {
        self.0.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
    }

    /// Final path segment
    pub fn file_name(&self) -> &str {
        self.0.rsplit_once('/').map(|(_, name)| name).unwrap_or(&self.0)
    }

    /// Extension of the file name, if any.
    ///
    /// A leading dot alone (`.htaccess`) is not an extension.
    pub fn extension(&self) -> Option<&str> {
        match self.file_name().rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// Resolve `reference` relative to this asset's directory.
    pub fn resolve_relative(&self, reference: &str) -> Option<AssetPath> {
        let dir = self.dir();
        if dir.is_empty() {
            Self::parse(reference)
        } else {
            Self::parse(&format!("{}/{}", dir, reference))
        }
    }

    /// Same directory, different file name
    pub fn with_file_name(&self, name: &str) -> AssetPath {
        let dir = self.dir();
        if dir.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}/{}", dir, name))
        }
    }

    /// Location of this asset under `root`
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.0
            .split('/')
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
