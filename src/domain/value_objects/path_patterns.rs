//! Path pattern value object
//!
//! Matches logical asset paths against gitignore-style patterns. Used for the
//! `exclude` list (files that never take part in revisioning) and the
//! `keep_names` list (files whose references are rewritten but whose name
//! stays stable).

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

use super::AssetPath;

/// Maximum number of patterns allowed in one list
const MAX_PATTERNS: usize = 1000;

/// Compiled set of gitignore-style patterns.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching.
#[derive(Debug)]
pub struct PathPatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for PathPatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl PathPatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile a list of patterns.
    ///
    /// Blank lines and `#` comments are skipped, `!pattern` re-includes.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, PatternError> {
        let mut builder = GitignoreBuilder::new("");
        let mut pattern_count = 0;

        for pattern in patterns {
            let line = pattern.as_ref();
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(PatternError::TooManyPatterns {
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(None, trimmed) {
                return Err(PatternError::InvalidPattern {
                    pattern: line.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| PatternError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a logical path matches (itself or through a parent directory).
    pub fn matches(&self, path: &AssetPath) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(Path::new(path.as_str()), false)
            .is_ignore()
    }

    /// Number of patterns compiled
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when compiling patterns.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("too many patterns ({count}), limit is {limit}")]
    TooManyPatterns { count: usize, limit: usize },

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to build pattern matcher: {0}")]
    BuildFailed(String),
}
