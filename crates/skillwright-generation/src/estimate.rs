//! Closed-form file-count estimation
//!
//! Computable from the selection alone, with no generation performed; shown
//! to the user for confirmation before any write. Must match the actual
//! output exactly for every platform × pack combination.

use crate::catalog::{CORE_DOCS, PLAYWRIGHT_CLI_DOCS, TEMPLATE_DOCS};

/// Files contributed by the core pack on multi-file platforms
pub const CORE_PACK_FILES: usize = CORE_DOCS.len();
/// Files contributed by the playwright-cli pack on multi-file platforms
pub const PLAYWRIGHT_CLI_PACK_FILES: usize = PLAYWRIGHT_CLI_DOCS.len();
/// Files contributed by the templates pack on multi-file platforms
pub const TEMPLATE_PACK_FILES: usize = TEMPLATE_DOCS.len();

/// Predict how many files a generation run will write
///
/// Copilot always produces a single consolidated file regardless of packs.
/// Every other platform writes one index file plus its pack contributions;
/// cursor collapses the playwright-cli pack to its index alone.
pub fn estimate_file_count(platforms: &[String], packs: &[String]) -> usize {
    let selected = |id: &str| packs.iter().any(|p| p == id);
    let mut total = 0;

    for platform in platforms {
        if platform == "copilot" {
            total += 1;
            continue;
        }

        let mut count = 1; // platform index file

        if selected("core") {
            count += CORE_PACK_FILES;
        }
        if selected("templates") {
            count += TEMPLATE_PACK_FILES;
        }
        if selected("playwright-cli") {
            count += if platform == "cursor" {
                1
            } else {
                PLAYWRIGHT_CLI_PACK_FILES
            };
        }

        total += count;
    }

    total
}
