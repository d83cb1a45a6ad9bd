//! Layout exactness: for a fixed representative selection, the full set of
//! written relative paths must equal the literal lists documented for each
//! platform, in order.

mod common;

use std::path::PathBuf;

use common::{ids, seeded_assets};
use skillwright_generation::ProjectSettings;
use skillwright_platforms::{generate, GenerateOptions, MemoryStore};

fn full_selection_options(platform: &str) -> GenerateOptions {
    GenerateOptions {
        platforms: ids(&[platform]),
        packs: ids(&["core", "playwright-cli", "templates"]),
        settings: ProjectSettings::default(),
        dest: PathBuf::from("proj"),
    }
}

#[test]
fn claude_layout_is_exact() {
    let (_dir, assets) = seeded_assets();
    let mut fs = MemoryStore::new();
    let result = generate(&full_selection_options("claude"), &assets, &mut fs).unwrap();

    assert_eq!(
        result.files,
        vec![
            ".claude/skills/playwright-e2e/SKILL.md",
            ".claude/skills/playwright-e2e/references/playwright-patterns.md",
            ".claude/skills/playwright-e2e/references/data-strategy.md",
            ".claude/skills/playwright-e2e/references/test-review.md",
            ".claude/skills/playwright-e2e/references/page-object-conventions.md",
            ".claude/skills/playwright-e2e/references/project-conventions.md",
            ".claude/skills/playwright-e2e/references/test-debugging.md",
            ".claude/skills/playwright-e2e/references/test-generation.md",
            ".claude/skills/playwright-e2e/references/test-planning.md",
            ".claude/skills/playwright-cli/SKILL.md",
            ".claude/skills/playwright-cli/references/request-mocking.md",
            ".claude/skills/playwright-cli/references/running-code.md",
            ".claude/skills/playwright-cli/references/session-management.md",
            ".claude/skills/playwright-cli/references/storage-state.md",
            ".claude/skills/playwright-cli/references/test-generation.md",
            ".claude/skills/playwright-cli/references/tracing.md",
            ".claude/skills/playwright-cli/references/video-recording.md",
        ]
    );
}

#[test]
fn cursor_layout_is_exact() {
    let (_dir, assets) = seeded_assets();
    let mut fs = MemoryStore::new();
    let result = generate(&full_selection_options("cursor"), &assets, &mut fs).unwrap();

    assert_eq!(
        result.files,
        vec![
            ".cursor/rules/playwright-e2e.mdc",
            ".cursor/rules/playwright-patterns.mdc",
            ".cursor/rules/data-strategy.mdc",
            ".cursor/rules/test-review.mdc",
            ".cursor/rules/playwright-cli.mdc",
            ".cursor/rules/page-object-conventions.mdc",
            ".cursor/rules/project-conventions.mdc",
            ".cursor/rules/test-debugging.mdc",
            ".cursor/rules/test-generation.mdc",
            ".cursor/rules/test-planning.mdc",
        ]
    );
}

#[test]
fn copilot_layout_is_exact() {
    let (_dir, assets) = seeded_assets();
    let mut fs = MemoryStore::new();
    let result = generate(&full_selection_options("copilot"), &assets, &mut fs).unwrap();

    assert_eq!(result.files, vec![".github/copilot-instructions.md"]);
}

#[test]
fn generic_layout_is_exact() {
    let (_dir, assets) = seeded_assets();
    let mut fs = MemoryStore::new();
    let result = generate(&full_selection_options("generic"), &assets, &mut fs).unwrap();

    assert_eq!(
        result.files,
        vec![
            ".agent-skills/SKILL.md",
            ".agent-skills/references/playwright-patterns.md",
            ".agent-skills/references/data-strategy.md",
            ".agent-skills/references/test-review.md",
            ".agent-skills/references/page-object-conventions.md",
            ".agent-skills/references/project-conventions.md",
            ".agent-skills/references/test-debugging.md",
            ".agent-skills/references/test-generation.md",
            ".agent-skills/references/test-planning.md",
            ".agent-skills/references/playwright-cli/SKILL.md",
            ".agent-skills/references/playwright-cli/references/request-mocking.md",
            ".agent-skills/references/playwright-cli/references/running-code.md",
            ".agent-skills/references/playwright-cli/references/session-management.md",
            ".agent-skills/references/playwright-cli/references/storage-state.md",
            ".agent-skills/references/playwright-cli/references/test-generation.md",
            ".agent-skills/references/playwright-cli/references/tracing.md",
            ".agent-skills/references/playwright-cli/references/video-recording.md",
        ]
    );
}

#[test]
fn multi_platform_run_preserves_selection_order() {
    let (_dir, assets) = seeded_assets();
    let mut fs = MemoryStore::new();
    let options = GenerateOptions {
        platforms: ids(&["cursor", "claude"]),
        packs: ids(&["core"]),
        settings: ProjectSettings::default(),
        dest: PathBuf::from("proj"),
    };

    let result = generate(&options, &assets, &mut fs).unwrap();

    // Cursor paths first (selected first), then claude paths.
    assert!(result.files[0].starts_with(".cursor/"));
    let first_claude = result
        .files
        .iter()
        .position(|f| f.starts_with(".claude/"))
        .unwrap();
    assert!(result.files[..first_claude]
        .iter()
        .all(|f| f.starts_with(".cursor/")));
    assert!(result.files[first_claude..]
        .iter()
        .all(|f| f.starts_with(".claude/")));
}

#[test]
fn shipped_skills_directory_contains_every_catalog_document() {
    let root = common::shipped_skills_root();
    let store = skillwright_generation::AssetStore::at(&root);
    for id in common::ALL_DOC_IDS {
        let content = store
            .read(id)
            .unwrap_or_else(|e| panic!("shipped document missing: {e}"));
        assert!(!content.trim().is_empty(), "{id} is empty");
    }
}
