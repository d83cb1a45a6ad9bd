//! Skill data models
//!
//! Skill entries are data (markdown blobs), not executable code. Identity is
//! the `(kind, name)` pair; content is immutable once produced.

use serde::{Deserialize, Serialize};

/// Which pack a skill entry belongs to, and how generators treat it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    /// Always-on pattern documentation, written as reference files
    Core,
    /// Documentation rendered through the template engine before layout
    Template,
    /// Granular reference docs that some platforms collapse to an index
    Reference,
}

/// One unit of documentation content produced by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Entry kind, drives per-platform filtering and placement
    pub kind: SkillKind,

    /// Relative-path-like identifier (e.g. `references/tracing.md`)
    pub name: String,

    /// Rendered or raw markdown content
    pub content: String,
}

impl SkillEntry {
    /// Create a new skill entry
    pub fn new(kind: SkillKind, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            content: content.into(),
        }
    }
}

/// User-supplied project settings used to build the template context
///
/// Free-form strings; defaulting is the only normalization applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Project name substituted into templated docs
    pub project_name: String,
    /// Base URL of the environment the suite targets
    pub base_url: String,
    /// Import path of a custom test fixture; empty or "none" means the
    /// stock `@playwright/test` fixture is in use
    pub fixture_import_path: String,
    /// Directory holding page object classes
    pub page_objects_dir: String,
    /// Directory pattern holding spec files
    pub test_dir: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            project_name: "my-e2e-suite".to_string(),
            base_url: "https://staging.example.com".to_string(),
            fixture_import_path: String::new(),
            page_objects_dir: "src/pages".to_string(),
            test_dir: "src/tests".to_string(),
        }
    }
}

/// Aggregate result of one generation run
///
/// `files` holds relative paths in platform-selection order, then each
/// generator's internal emission order. Consumers display this list, so the
/// ordering is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Number of files written
    pub files_created: usize,
    /// Relative paths of every file written, in emission order
    pub files: Vec<String>,
}
