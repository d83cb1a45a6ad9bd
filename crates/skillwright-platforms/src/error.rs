//! Error types for platform generation

use thiserror::Error;

use skillwright_generation::CatalogError;

/// Errors raised while laying out files for a platform
///
/// All variants abort the remaining pipeline; files already written stay on
/// disk (no rollback).
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Catalog construction or asset access failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A destination file or directory could not be written
    #[error("failed to write '{path}': {source}")]
    Write {
        /// Relative destination path
        path: String,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
