//! Generation orchestrator
//!
//! Single linear batch transform: build the template context, build the
//! skill catalog, then run each selected platform generator in caller
//! order and aggregate the written paths. No retries and no partial
//! commit; a failure aborts the remainder of the run and leaves earlier
//! writes on disk.

use std::path::PathBuf;

use tracing::{info, warn};

use skillwright_generation::{
    build_catalog, AssetStore, GenerationResult, ProjectSettings, TemplateContext,
};

use crate::error::GenerateError;
use crate::fs::FileStore;
use crate::platforms::lookup;

/// Everything one generation run needs
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Platform identifiers, processed in this order
    pub platforms: Vec<String>,
    /// Selected pack identifiers
    pub packs: Vec<String>,
    /// Project settings feeding the template context
    pub settings: ProjectSettings,
    /// Destination root the layouts are written under
    pub dest: PathBuf,
}

/// Run the full pipeline: select → render → lay out → report
///
/// Unknown platform identifiers are skipped with a warning, matching the
/// closed-set dispatch contract.
pub fn generate(
    options: &GenerateOptions,
    assets: &AssetStore,
    fs: &mut dyn FileStore,
) -> Result<GenerationResult, GenerateError> {
    let ctx = TemplateContext::from_settings(&options.settings);
    let entries = build_catalog(&options.packs, assets, &ctx)?;

    let mut files = Vec::new();
    for platform in &options.platforms {
        let Some(generator) = lookup(platform) else {
            warn!(platform = %platform, "unknown platform identifier, skipping");
            continue;
        };
        let written = generator(&options.dest, &entries, assets, fs)?;
        info!(platform = %platform, files = written.len(), "platform layout complete");
        files.extend(written);
    }

    Ok(GenerationResult {
        files_created: files.len(),
        files,
    })
}
