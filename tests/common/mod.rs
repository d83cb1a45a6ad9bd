//! Shared fixtures for integration tests

use std::fs;
use std::path::Path;

use skillwright_generation::AssetStore;
use tempfile::TempDir;

/// Every document identifier the catalog and generators may read
pub const ALL_DOC_IDS: [&str; 20] = [
    "indexes/claude-skill.md",
    "indexes/cursor-rules.mdc",
    "indexes/copilot-instructions.md",
    "indexes/skill-index.md",
    "core/playwright-patterns.md",
    "core/data-strategy.md",
    "core/test-review.md",
    "playwright-cli/SKILL.md",
    "playwright-cli/references/request-mocking.md",
    "playwright-cli/references/running-code.md",
    "playwright-cli/references/session-management.md",
    "playwright-cli/references/storage-state.md",
    "playwright-cli/references/test-generation.md",
    "playwright-cli/references/tracing.md",
    "playwright-cli/references/video-recording.md",
    "templates/page-object-conventions.md",
    "templates/project-conventions.md",
    "templates/test-debugging.md",
    "templates/test-generation.md",
    "templates/test-planning.md",
];

/// Seed a temporary asset root with one stub document per identifier
pub fn seeded_assets() -> (TempDir, AssetStore) {
    let dir = TempDir::new().unwrap();
    for id in ALL_DOC_IDS {
        let path = dir.path().join(id);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("# {id}\n\nbody of {id}\n")).unwrap();
    }
    let store = AssetStore::at(dir.path());
    (dir, store)
}

/// Convert string literals into owned identifiers
pub fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The `skills/` directory shipped with this repository
pub fn shipped_skills_root() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("skills")
}
