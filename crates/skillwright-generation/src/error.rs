//! Error types for catalog construction and asset access

use thiserror::Error;

/// Errors raised while resolving the asset root or reading source documents
///
/// Every variant is fatal for the run: the catalog is never returned
/// partially built.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No candidate location contained the skills directory
    #[error("could not find the skills directory; checked:\n{}", candidates.join("\n"))]
    AssetRootNotFound {
        /// Every location probed, in probe order
        candidates: Vec<String>,
    },

    /// A named source document was missing or unreadable
    #[error("failed to read skill document '{id}': {source}")]
    AssetRead {
        /// Fixed relative identifier of the document
        id: String,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
