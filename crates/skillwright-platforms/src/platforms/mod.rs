//! Platform generator registry
//!
//! A platform is a target AI-assistant tooling convention with its own
//! expected file layout. The set is closed: four named behaviors selected by
//! identifier. Generators hold no state; every behavior is a function of the
//! destination root, the skill entries, and the asset store.

use std::path::Path;

use skillwright_generation::{AssetStore, SkillEntry};

use crate::error::GenerateError;
use crate::fs::FileStore;

pub mod claude;
pub mod copilot;
pub mod cursor;
pub mod generic;

/// One platform layout behavior
pub type GeneratorFn = fn(
    &Path,
    &[SkillEntry],
    &AssetStore,
    &mut dyn FileStore,
) -> Result<Vec<String>, GenerateError>;

/// The closed set of platform identifiers
pub const PLATFORM_IDS: [&str; 4] = ["claude", "cursor", "copilot", "generic"];

/// Identifier → generator registry
static REGISTRY: [(&str, GeneratorFn); 4] = [
    ("claude", claude::generate),
    ("cursor", cursor::generate),
    ("copilot", copilot::generate),
    ("generic", generic::generate),
];

/// Look up the generator for a platform identifier
pub fn lookup(platform: &str) -> Option<GeneratorFn> {
    REGISTRY
        .iter()
        .find(|(id, _)| *id == platform)
        .map(|(_, f)| *f)
}

/// Write one file under the destination root and record its relative path
pub(crate) fn emit(
    fs: &mut dyn FileStore,
    dest: &Path,
    relative: String,
    content: &str,
    files: &mut Vec<String>,
) -> Result<(), GenerateError> {
    let full = dest.join(&relative);
    fs.write_file(&full, content)
        .map_err(|source| GenerateError::Write {
            path: relative.clone(),
            source,
        })?;
    files.push(relative);
    Ok(())
}
