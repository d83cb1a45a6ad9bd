//! Skill catalog
//!
//! Each pack contributes a fixed, explicit ordered list of named entries.
//! The identifiers and their counts are part of the contract: file-count
//! estimation depends on them. Overall list order is catalog-definition
//! order (core, playwright-cli, templates), independent of the order the
//! caller selected packs in.

use tracing::debug;

use crate::assets::AssetStore;
use crate::context::TemplateContext;
use crate::engine::render;
use crate::error::CatalogError;
use crate::models::{SkillEntry, SkillKind};

/// The closed set of selectable pack identifiers, in catalog order
pub const PACK_IDS: [&str; 3] = ["core", "playwright-cli", "templates"];

/// Core pattern documents, read from `core/<name>`
pub const CORE_DOCS: [&str; 3] = ["playwright-patterns.md", "data-strategy.md", "test-review.md"];

/// Playwright CLI skill documents, read from `playwright-cli/<name>`
pub const PLAYWRIGHT_CLI_DOCS: [&str; 8] = [
    "SKILL.md",
    "references/request-mocking.md",
    "references/running-code.md",
    "references/session-management.md",
    "references/storage-state.md",
    "references/test-generation.md",
    "references/tracing.md",
    "references/video-recording.md",
];

/// Templated documents, read from `templates/<name>` and rendered
pub const TEMPLATE_DOCS: [&str; 5] = [
    "page-object-conventions.md",
    "project-conventions.md",
    "test-debugging.md",
    "test-generation.md",
    "test-planning.md",
];

/// Build the ordered skill entry list for the selected packs
///
/// Template-pack entries are rendered through the engine with the run's
/// context; all other entries are raw source text. A single unreadable
/// document fails the whole catalog.
pub fn build_catalog(
    packs: &[String],
    assets: &AssetStore,
    ctx: &TemplateContext,
) -> Result<Vec<SkillEntry>, CatalogError> {
    let selected = |id: &str| packs.iter().any(|p| p == id);
    let mut entries = Vec::new();

    if selected("core") {
        for name in CORE_DOCS {
            let content = assets.read(&format!("core/{name}"))?;
            entries.push(SkillEntry::new(SkillKind::Core, name, content));
        }
    }

    if selected("playwright-cli") {
        for name in PLAYWRIGHT_CLI_DOCS {
            let content = assets.read(&format!("playwright-cli/{name}"))?;
            entries.push(SkillEntry::new(SkillKind::Reference, name, content));
        }
    }

    if selected("templates") {
        for name in TEMPLATE_DOCS {
            let raw = assets.read(&format!("templates/{name}"))?;
            entries.push(SkillEntry::new(SkillKind::Template, name, render(&raw, ctx)));
        }
    }

    debug!(packs = ?packs, entries = entries.len(), "built skill catalog");
    Ok(entries)
}
