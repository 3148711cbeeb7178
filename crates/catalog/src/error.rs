//! Error types for the catalog crate.
//!
//! These errors never reach the caller of [`crate::load`]: the loader
//! recovers from every one of them by substituting the seed catalog.
//! They exist so the fallible fetch layer can report *why* the fallback
//! was taken, for diagnostics only.

use thiserror::Error;

/// Errors that can occur while fetching and parsing the catalog document
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport failure or non-success status from a URL source
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error while reading a file source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document was not a valid JSON array of movie records
    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but contained no records
    #[error("Catalog document is empty")]
    Empty,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
