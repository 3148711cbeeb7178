//! Catalog loading logic.
//!
//! One read per application session, performed once at startup: fetch the
//! JSON document, parse it into records, and fall back to the built-in
//! seed set on any failure. No retry, no polling, no cache invalidation.

use crate::error::{CatalogError, Result};
use crate::seed::seed_catalog;
use crate::types::Catalog;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
}

impl CatalogSource {
    /// Classify a source spec string: `http://`/`https://` prefixes are
    /// URLs, anything else is treated as a filesystem path.
    pub fn parse(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            Self::Url(spec.to_string())
        } else {
            Self::File(PathBuf::from(spec))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch and parse the catalog document from a source.
///
/// This is the fallible half of the loader. An empty document counts as a
/// failure: the caller must always end up with records to render.
pub async fn fetch(source: &CatalogSource) -> Result<Catalog> {
    let records: Catalog = match source {
        CatalogSource::Url(url) => {
            let response = reqwest::get(url).await?.error_for_status()?;
            response.json().await?
        }
        CatalogSource::File(path) => {
            let bytes = tokio::fs::read(path).await?;
            serde_json::from_slice(&bytes)?
        }
    };

    if records.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(records)
}

/// Load the catalog, substituting the seed set on any failure.
///
/// Never fails and never retries: transport errors, non-success statuses,
/// malformed documents, and empty payloads all degrade to the fixed seed
/// catalog, with the underlying error logged for diagnostics.
pub async fn load(source: &CatalogSource) -> Catalog {
    match fetch(source).await {
        Ok(records) => {
            info!("Loaded {} records from {}", records.len(), source);
            records
        }
        Err(err) => {
            warn!("Catalog fetch from {} failed ({}); using built-in seed set", source, err);
            seed_catalog()
        }
    }
}
