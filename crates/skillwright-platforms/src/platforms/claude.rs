//! Claude Code platform generator
//!
//! Output structure:
//!   .claude/skills/playwright-e2e/SKILL.md
//!   .claude/skills/playwright-e2e/references/*.md
//!   .claude/skills/playwright-cli/SKILL.md
//!   .claude/skills/playwright-cli/references/*.md
//!
//! No filtering: every selected entry is written. Existing files are
//! overwritten.

use std::path::Path;

use tracing::debug;

use skillwright_generation::{AssetStore, SkillEntry, SkillKind};

use super::emit;
use crate::error::GenerateError;
use crate::fs::FileStore;

/// Lay out skill entries in the Claude Code convention
pub fn generate(
    dest: &Path,
    entries: &[SkillEntry],
    assets: &AssetStore,
    fs: &mut dyn FileStore,
) -> Result<Vec<String>, GenerateError> {
    let mut files = Vec::new();

    let index = assets.read("indexes/claude-skill.md")?;
    emit(
        fs,
        dest,
        ".claude/skills/playwright-e2e/SKILL.md".to_string(),
        &index,
        &mut files,
    )?;

    // Core and template entries become sibling reference files
    for entry in entries {
        if matches!(entry.kind, SkillKind::Core | SkillKind::Template) {
            emit(
                fs,
                dest,
                format!(".claude/skills/playwright-e2e/references/{}", entry.name),
                &entry.content,
                &mut files,
            )?;
        }
    }

    // Reference entries form their own skill directory, led by their index
    for entry in entries {
        if entry.kind == SkillKind::Reference {
            emit(
                fs,
                dest,
                format!(".claude/skills/playwright-cli/{}", entry.name),
                &entry.content,
                &mut files,
            )?;
        }
    }

    debug!(files = files.len(), "claude layout written");
    Ok(files)
}
