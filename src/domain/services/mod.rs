//! Domain Services
//!
//! Pure revisioning logic: naming, reference discovery, ordering, and
//! manifest assembly. None of these services touch the file system.

mod dependency_graph;
mod fingerprinter;
mod manifest_builder;
mod references;

pub use dependency_graph::{CycleError, DependencyGraph};
pub use fingerprinter::{Fingerprinter, DEFAULT_HASH_LENGTH, MAX_HASH_LENGTH, MIN_HASH_LENGTH};
pub use manifest_builder::ManifestBuilder;
pub use references::{rewrite_references, Reference, ReferenceScanner, ScanResult};
