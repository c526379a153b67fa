//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_path;
mod hash;
mod path_patterns;

pub use asset_path::AssetPath;
pub use hash::{ContentHash, Integrity, IntegrityAlgorithm, IntegrityParseError};
pub use path_patterns::{PathPatterns, PatternError};
