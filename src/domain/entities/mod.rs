//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Asset` - A built file awaiting revisioning
//! - `RevisedAsset` - An asset with final content and name
//! - `Manifest` - Logical path → fingerprinted path + integrity

mod asset;
mod manifest;

pub use asset::{Asset, RevisedAsset};
pub use manifest::{Manifest, ManifestEntry};
