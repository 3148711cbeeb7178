//! Core domain types for the plot-twist catalog.
//!
//! The wire schema uses capitalized field names (`Year`, `Title`,
//! `RT_Critic`, ...) inherited from the published movies.json document;
//! serde renames map them onto idiomatic Rust fields.

use serde::{Deserialize, Serialize};

/// An ordered collection of movie records, as loaded from the source.
///
/// Load order matters: it is the tiebreak order for stable sorting.
pub type Catalog = Vec<MovieRecord>;

/// A single movie with its spoiler annotation.
///
/// Records are immutable after load. The title doubles as the record's
/// identity: favorites and spoiler-reveal state are keyed by it, and the
/// catalog is assumed not to contain two records with the same title
/// (not validated at load time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Year")]
    pub year: i32,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Genre")]
    pub genre: String,

    #[serde(rename = "Country")]
    pub country: String,

    /// Searched case-insensitively alongside the title.
    /// Defaults to empty when the source omits it.
    #[serde(rename = "Description", default)]
    pub description: String,

    /// Rotten Tomatoes critic score, conventionally 0-100
    #[serde(rename = "RT_Critic")]
    pub critic_score: i32,

    /// Rotten Tomatoes audience score, conventionally 0-100
    #[serde(rename = "RT_Audience")]
    pub audience_score: i32,

    /// Streaming platform the movie is available on
    #[serde(rename = "Availability")]
    pub availability: String,

    /// The plot twist. Never shown until explicitly revealed.
    /// Defaults to empty when the source omits it.
    #[serde(rename = "Spoilers", default)]
    pub spoiler: String,
}
