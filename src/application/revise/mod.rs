//! Revise Module
//!
//! Orchestrates a revisioning pass: fingerprint every asset under the output
//! root, rewrite references between them, and record the mapping in a
//! manifest.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`RevisionOptions`)
//! - `result` - Result types (`RevisionResult`)
//! - `materializer` - Writes targets and retires originals (`TreeMaterializer`)
//! - `use_case` - Core use case logic (`RevisionUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use assetrev::application::revise::{RevisionOptions, RevisionUseCase};
//! use assetrev::infrastructure::{JsonManifestRepository, LocalFs};
//!
//! let use_case = RevisionUseCase::new(LocalFs::new(), JsonManifestRepository::new());
//! let result = use_case.execute(&RevisionOptions::new("public"))?;
//! ```

mod materializer;
mod options;
mod result;
mod use_case;

pub use materializer::{Materialized, TreeMaterializer};
pub use options::RevisionOptions;
pub use result::{MissingReference, RevisionResult};
pub use use_case::RevisionUseCase;
