//! Query engine for the plot-twist catalog.
//!
//! This crate provides:
//! - Query and SortKey value objects
//! - The `apply` transform (filter + stable sort)
//! - Facet derivation from the full catalog
//! - View statistics (counts and rounded score averages)
//!
//! ## Architecture
//! Everything here is a pure recomputation from the loaded catalog and the
//! current query: the presentation layer re-invokes it on any input change
//! with no hidden dependency tracking and no locking.
//!
//! ## Example Usage
//! ```ignore
//! use query::{apply, Facets, Query, SortKey, ViewStats};
//!
//! let facets = Facets::derive(&catalog);   // once per catalog
//!
//! let query = Query {
//!     search: "ghost".to_string(),
//!     genre: Some("Horror".to_string()),
//!     sort: SortKey::parse("critic-desc"),
//!     ..Query::default()
//! };
//!
//! let view = apply(&catalog, &query);      // on every input change
//! let stats = ViewStats::compute(&view);
//! ```

pub mod engine;
pub mod facets;
pub mod stats;
pub mod types;

// Re-export main types
pub use engine::apply;
pub use facets::Facets;
pub use stats::ViewStats;
pub use types::{Query, SortKey};
