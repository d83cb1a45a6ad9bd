//! Narrow file-system capability
//!
//! Generators touch disk only through [`FileStore`], so the layout logic can
//! be exercised against [`MemoryStore`] in tests while [`DiskStore`] backs
//! real runs. Reading doubles as the existence probe the append-merge
//! platform needs.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write-and-read capability over a destination tree
pub trait FileStore {
    /// Write `content` at `path`, creating parent directories as needed;
    /// overwrites any existing file
    fn write_file(&mut self, path: &Path, content: &str) -> io::Result<()>;

    /// Read the file at `path`, or `None` when it does not exist
    fn read_file(&self, path: &Path) -> io::Result<Option<String>>;
}

/// Real file-system store
#[derive(Debug, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn write_file(&mut self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }

    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store used as a test double
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of one stored file
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Every stored path, in sorted order
    pub fn paths(&self) -> Vec<&Path> {
        self.files.keys().map(PathBuf::as_path).collect()
    }

    /// Number of stored files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileStore for MemoryStore {
    fn write_file(&mut self, path: &Path, content: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}
