//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RevisionUseCase` - Fingerprints an output tree and writes its manifest
//! - `VerifyUseCase` - Checks a manifest against the tree on disk

pub mod revise;
pub mod verify;

pub use revise::{
    MissingReference, RevisionOptions, RevisionResult, RevisionUseCase, TreeMaterializer,
};
pub use verify::{VerifyIssue, VerifyOptions, VerifyReport, VerifyUseCase};
