//! # Catalog Crate
//!
//! This crate handles loading the plot-twist movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Catalog)
//! - **loader**: Fetch the JSON document from a URL or file, with fallback
//! - **seed**: The built-in fallback records
//! - **error**: Diagnostic error types for the fetch layer
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load, CatalogSource};
//!
//! // One read per session; never fails
//! let source = CatalogSource::parse("https://example.com/movies.json");
//! let catalog = load(&source).await;
//!
//! println!("{} movies in the catalog", catalog.len());
//! ```
//!
//! ## Contract
//!
//! [`load`] always returns a non-empty catalog: either the fetched records
//! or, when the source is unreachable, malformed, or empty, the fixed seed
//! set from [`seed_catalog`]. Errors are logged, never surfaced.

// Public modules
pub mod error;
pub mod loader;
pub mod seed;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::{CatalogSource, fetch, load};
pub use seed::seed_catalog;
pub use types::{Catalog, MovieRecord};
