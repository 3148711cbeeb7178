//! Facet derivation.
//!
//! The genre/country/platform option lists come from the *full* catalog,
//! not the filtered view, so a selection never prunes its own options.
//! Recomputed when the catalog changes, which is once per session.

use catalog::MovieRecord;
use std::collections::BTreeSet;

/// Distinct facet values present in the catalog, each list sorted
/// lexicographically with duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub genres: Vec<String>,
    pub countries: Vec<String>,
    pub platforms: Vec<String>,
}

impl Facets {
    /// Derive the facet option lists from the full catalog.
    pub fn derive(catalog: &[MovieRecord]) -> Self {
        Self {
            genres: distinct(catalog.iter().map(|r| r.genre.as_str())),
            countries: distinct(catalog.iter().map(|r| r.country.as_str())),
            platforms: distinct(catalog.iter().map(|r| r.availability.as_str())),
        }
    }
}

/// BTreeSet gives us dedup and lexicographic order in one pass.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(genre: &str, country: &str, availability: &str) -> MovieRecord {
        MovieRecord {
            year: 2000,
            title: format!("{genre}/{country}/{availability}"),
            genre: genre.to_string(),
            country: country.to_string(),
            description: String::new(),
            critic_score: 50,
            audience_score: 50,
            availability: availability.to_string(),
            spoiler: String::new(),
        }
    }

    #[test]
    fn test_facets_are_sorted_and_deduplicated() {
        let catalog = vec![
            record("Thriller", "USA", "Netflix"),
            record("Drama", "South Korea", "Hulu"),
            record("Thriller", "USA", "Netflix"),
        ];

        let facets = Facets::derive(&catalog);
        assert_eq!(facets.genres, vec!["Drama", "Thriller"]);
        assert_eq!(facets.countries, vec!["South Korea", "USA"]);
        assert_eq!(facets.platforms, vec!["Hulu", "Netflix"]);
    }

    #[test]
    fn test_facets_of_empty_catalog_are_empty() {
        let facets = Facets::derive(&[]);
        assert!(facets.genres.is_empty());
        assert!(facets.countries.is_empty());
        assert!(facets.platforms.is_empty());
    }
}
