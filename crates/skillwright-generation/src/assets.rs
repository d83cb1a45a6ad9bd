//! Asset root resolution and source document access
//!
//! Skill documents ship with the tool under a `skills/` directory and are
//! addressed by fixed relative identifiers known at compile time; nothing is
//! discovered by directory listing.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CatalogError;

/// Environment variable that overrides asset root resolution
pub const SKILLS_DIR_ENV: &str = "SKILLWRIGHT_SKILLS_DIR";

/// Read-only store of static skill documents
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Open a store rooted at a known directory (tests, embedding callers)
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the skills directory from a fixed list of candidate locations
    ///
    /// Probe order: the `SKILLWRIGHT_SKILLS_DIR` override, `skills/` next to
    /// the executable, `skills/` one level above it (cargo target layouts),
    /// then `skills/` under the current working directory. The first
    /// candidate that exists wins; if none does, the error lists every
    /// location checked.
    pub fn resolve() -> Result<Self, CatalogError> {
        let mut candidates: Vec<PathBuf> = Vec::new();

        if let Ok(dir) = env::var(SKILLS_DIR_ENV) {
            candidates.push(PathBuf::from(dir));
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                candidates.push(exe_dir.join("skills"));
                if let Some(above) = exe_dir.parent() {
                    candidates.push(above.join("skills"));
                }
            }
        }
        if let Ok(cwd) = env::current_dir() {
            candidates.push(cwd.join("skills"));
        }

        for candidate in &candidates {
            if candidate.is_dir() {
                debug!(root = %candidate.display(), "resolved skills directory");
                return Ok(Self::at(candidate));
            }
        }

        Err(CatalogError::AssetRootNotFound {
            candidates: candidates
                .iter()
                .map(|c| format!("  {}", c.display()))
                .collect(),
        })
    }

    /// The resolved root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read one named source document
    pub fn read(&self, id: &str) -> Result<String, CatalogError> {
        fs::read_to_string(self.root.join(id)).map_err(|source| CatalogError::AssetRead {
            id: id.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_named_document() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("core")).unwrap();
        fs::write(dir.path().join("core/doc.md"), "# Doc\n").unwrap();

        let store = AssetStore::at(dir.path());
        assert_eq!(store.read("core/doc.md").unwrap(), "# Doc\n");
    }

    #[test]
    fn root_not_found_error_lists_every_candidate_checked() {
        let err = CatalogError::AssetRootNotFound {
            candidates: vec![
                "  /opt/skillwright/skills".to_string(),
                "  /opt/skills".to_string(),
                "  /home/user/project/skills".to_string(),
            ],
        };

        let msg = err.to_string();
        assert!(msg.starts_with("could not find the skills directory"));
        // One line per probed location, in probe order.
        assert!(msg.contains("\n  /opt/skillwright/skills\n"));
        assert!(msg.contains("\n  /opt/skills\n"));
        assert!(msg.ends_with("\n  /home/user/project/skills"));
    }

    #[test]
    fn missing_document_is_fatal_with_id() {
        let dir = TempDir::new().unwrap();
        let store = AssetStore::at(dir.path());
        let err = store.read("core/absent.md").unwrap_err();
        match err {
            CatalogError::AssetRead { id, .. } => assert_eq!(id, "core/absent.md"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
