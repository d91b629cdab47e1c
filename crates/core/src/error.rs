//! Catalog-domain error type.
//!
//! Every failure in the submission pipeline is terminal: the run aborts at
//! the first error and performs no rollback of files already staged.

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The inbound export document could not be read or parsed as JSON.
    #[error("Failed to load export JSON: {0}")]
    Input(String),

    /// The export parsed but is missing a required field.
    #[error("Export JSON missing required field '{0}'")]
    Schema(&'static str),

    /// No `index.json` in the catalog root. The pipeline never bootstraps
    /// an index from scratch.
    #[error("index.json not found in '{0}'. Run from the catalog root")]
    MissingIndex(String),

    /// Filesystem failure while staging files or persisting the index.
    #[error("I/O error: {0}")]
    Io(String),
}
