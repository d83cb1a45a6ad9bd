//! GitHub Copilot platform generator
//!
//! Output structure: exactly one file, `.github/copilot-instructions.md`,
//! built from the consolidated index plus every kept entry. Granular
//! playwright-cli references are skipped to keep the file manageable.
//!
//! Merge semantics are append, not overwrite: when the destination already
//! exists, the new block is appended after a separator so nothing the user
//! accumulated is lost. Rerunning grows the file; that is the documented
//! behavior, not a bug.

use std::path::Path;

use tracing::debug;

use skillwright_generation::{AssetStore, SkillEntry, SkillKind};

use super::emit;
use crate::error::GenerateError;
use crate::fs::FileStore;

const SEPARATOR: &str = "\n\n---\n\n";
const REFERENCES_HEADING: &str = "\n\n---\n\n# Detailed Skill References\n";

/// Lay out skill entries as one consolidated Copilot instructions file
pub fn generate(
    dest: &Path,
    entries: &[SkillEntry],
    assets: &AssetStore,
    fs: &mut dyn FileStore,
) -> Result<Vec<String>, GenerateError> {
    let mut files = Vec::new();
    let relative = ".github/copilot-instructions.md".to_string();
    let full = dest.join(&relative);

    let mut content = assets.read("indexes/copilot-instructions.md")?;

    if !entries.is_empty() {
        content.push_str(REFERENCES_HEADING);
        for entry in entries {
            if entry.kind == SkillKind::Reference && entry.name != "SKILL.md" {
                continue;
            }
            content.push_str(SEPARATOR);
            content.push_str(&entry.content);
        }
    }

    let existing = fs.read_file(&full).map_err(|source| GenerateError::Write {
        path: relative.clone(),
        source,
    })?;
    let final_content = match existing {
        Some(previous) => format!("{previous}{SEPARATOR}{content}"),
        None => content,
    };

    emit(fs, dest, relative, &final_content, &mut files)?;
    debug!("copilot instructions written");
    Ok(files)
}
