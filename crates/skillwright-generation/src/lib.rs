#![warn(missing_docs)]

//! Skill generation core for skillwright
//!
//! Provides the skill catalog (fixed per-pack manifests of documentation
//! entries), a minimal placeholder/conditional template engine, the context
//! builder that derives template values from project settings, asset root
//! resolution, and the closed-form file-count estimate shown to users before
//! any file is written.

pub mod assets;
pub mod catalog;
pub mod context;
pub mod engine;
pub mod error;
pub mod estimate;
pub mod models;

pub use assets::AssetStore;
pub use catalog::{build_catalog, PACK_IDS};
pub use context::{ContextValue, TemplateContext};
pub use engine::render;
pub use error::CatalogError;
pub use estimate::estimate_file_count;
pub use models::{GenerationResult, ProjectSettings, SkillEntry, SkillKind};
