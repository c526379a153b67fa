//! Domain Layer
//!
//! The core of assetrev: pure revisioning logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Assets and the manifest
//! - `value_objects/` - Asset paths, content hashes, integrity strings, path patterns
//! - `services/` - Fingerprinting, reference scanning, ordering, manifest assembly
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
