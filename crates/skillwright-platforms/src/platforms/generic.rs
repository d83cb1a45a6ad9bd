//! Generic platform generator
//!
//! Output structure:
//!   .agent-skills/SKILL.md
//!   .agent-skills/references/*.md
//!   .agent-skills/references/playwright-cli/SKILL.md
//!   .agent-skills/references/playwright-cli/references/*.md
//!
//! Same shape as the Claude layout, under a tool-agnostic root, with the
//! reference skill nested under the references directory instead of as a
//! sibling. Existing files are overwritten.

use std::path::Path;

use tracing::debug;

use skillwright_generation::{AssetStore, SkillEntry, SkillKind};

use super::emit;
use crate::error::GenerateError;
use crate::fs::FileStore;

/// Lay out skill entries in the tool-agnostic convention
pub fn generate(
    dest: &Path,
    entries: &[SkillEntry],
    assets: &AssetStore,
    fs: &mut dyn FileStore,
) -> Result<Vec<String>, GenerateError> {
    let mut files = Vec::new();

    let index = assets.read("indexes/skill-index.md")?;
    emit(
        fs,
        dest,
        ".agent-skills/SKILL.md".to_string(),
        &index,
        &mut files,
    )?;

    for entry in entries {
        if matches!(entry.kind, SkillKind::Core | SkillKind::Template) {
            emit(
                fs,
                dest,
                format!(".agent-skills/references/{}", entry.name),
                &entry.content,
                &mut files,
            )?;
        }
    }

    for entry in entries {
        if entry.kind == SkillKind::Reference {
            emit(
                fs,
                dest,
                format!(".agent-skills/references/playwright-cli/{}", entry.name),
                &entry.content,
                &mut files,
            )?;
        }
    }

    debug!(files = files.len(), "generic layout written");
    Ok(files)
}
