//! Configuration module for assetrev
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETREV_*)
//! 3. Project config (assetrev.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME};
pub use types::{
    Config, IntegrityConfig, MissingReferencePolicy, OutputConfig, ReferencesConfig,
    RevisionConfig,
};
