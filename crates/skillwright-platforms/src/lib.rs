#![warn(missing_docs)]

//! Platform layout generators for skillwright
//!
//! Four target platforms share one capability: lay out a rendered skill list
//! as a concrete file tree. Each differs only in layout, filtering, and merge
//! rules, so dispatch is a registry lookup by identifier rather than a type
//! hierarchy. The orchestrator composes the catalog with the selected
//! generators and reports every path written.

pub mod error;
pub mod fs;
pub mod generator;
pub mod platforms;

pub use error::GenerateError;
pub use fs::{DiskStore, FileStore, MemoryStore};
pub use generator::{generate, GenerateOptions};
pub use platforms::{lookup, GeneratorFn, PLATFORM_IDS};
