//! Query value objects.
//!
//! A [`Query`] is transient and fully re-derivable from UI state: the
//! presentation layer rebuilds one on every input change and hands it to
//! [`crate::apply`]. Nothing here is persisted.

use std::fmt;

/// Sort order for the filtered view.
///
/// Sorting is stable for every key: records comparing equal retain their
/// relative catalog order (ties are common, e.g. many films share a year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Year descending, the default
    #[default]
    YearDesc,
    YearAsc,
    TitleAsc,
    TitleDesc,
    CriticDesc,
    CriticAsc,
    AudienceDesc,
    AudienceAsc,
}

impl SortKey {
    /// Every key, in the order a sort picker should expose them.
    pub const ALL: [SortKey; 8] = [
        SortKey::YearDesc,
        SortKey::YearAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::CriticDesc,
        SortKey::CriticAsc,
        SortKey::AudienceDesc,
        SortKey::AudienceAsc,
    ];

    /// Parse a hyphenated sort spec ("year-desc", "title-asc", ...).
    ///
    /// Unknown or empty specs fall back to `YearDesc` rather than erroring;
    /// an unrecognized sort key must never break the view.
    pub fn parse(spec: &str) -> Self {
        match spec {
            "year-asc" => Self::YearAsc,
            "title-asc" => Self::TitleAsc,
            "title-desc" => Self::TitleDesc,
            "critic-desc" => Self::CriticDesc,
            "critic-asc" => Self::CriticAsc,
            "audience-desc" => Self::AudienceDesc,
            "audience-asc" => Self::AudienceAsc,
            _ => Self::YearDesc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::YearDesc => "year-desc",
            Self::YearAsc => "year-asc",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::CriticDesc => "critic-desc",
            Self::CriticAsc => "critic-asc",
            Self::AudienceDesc => "audience-desc",
            Self::AudienceAsc => "audience-asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compound filter + sort request against the catalog.
///
/// All ranges are inclusive on both bounds. Facet selections of `None`
/// match every record; `Some(value)` requires exact, case-sensitive
/// equality. The search text matches case-insensitively against title and
/// description.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub search: String,
    pub genre: Option<String>,
    pub country: Option<String>,
    pub availability: Option<String>,
    /// Inclusive (min, max) release-year bounds
    pub year_range: (i32, i32),
    /// Inclusive (min, max) critic-score bounds, conventionally within 0-100
    pub critic_range: (i32, i32),
    /// Inclusive (min, max) audience-score bounds
    pub audience_range: (i32, i32),
    pub sort: SortKey,
}

impl Default for Query {
    /// The unfiltered query: matches every record, sorted year-desc.
    fn default() -> Self {
        Self {
            search: String::new(),
            genre: None,
            country: None,
            availability: None,
            year_range: (1900, 2100),
            critic_range: (0, 100),
            audience_range: (0, 100),
            sort: SortKey::YearDesc,
        }
    }
}
