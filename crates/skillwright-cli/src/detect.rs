//! Project detection
//!
//! Advisory probes of the destination directory; results are shown to the
//! user and never gate generation.

use std::path::Path;

/// What the destination directory looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetection {
    /// A playwright.config.{ts,js,mts} exists
    pub has_playwright_config: bool,
    /// A tsconfig.json (or TS playwright config) exists
    pub is_typescript: bool,
}

/// Probe the destination directory for Playwright and TypeScript markers
pub fn detect_project(dir: &Path) -> ProjectDetection {
    let has_playwright_config = dir.join("playwright.config.ts").exists()
        || dir.join("playwright.config.js").exists()
        || dir.join("playwright.config.mts").exists();

    let is_typescript =
        dir.join("tsconfig.json").exists() || dir.join("playwright.config.ts").exists();

    ProjectDetection {
        has_playwright_config,
        is_typescript,
    }
}
