//! The query engine: a single pure transform from catalog + query to an
//! ordered view.
//!
//! ## Algorithm
//! 1. Lowercase the search needle once for the whole pass
//! 2. Linear scan, keeping records that satisfy every filter clause
//! 3. Stable sort by the selected key
//!
//! The result borrows from the catalog; nothing is mutated, so the
//! presentation layer can recompute on every input change.

use crate::types::{Query, SortKey};
use catalog::MovieRecord;
use std::cmp::Ordering;
use tracing::debug;

/// Apply a query to the catalog, producing the filtered, ordered view.
pub fn apply<'a>(catalog: &'a [MovieRecord], query: &Query) -> Vec<&'a MovieRecord> {
    let needle = query.search.trim().to_lowercase();

    let mut view: Vec<&MovieRecord> = catalog
        .iter()
        .filter(|record| matches(record, query, &needle))
        .collect();

    sort_view(&mut view, query.sort);

    debug!(
        "query matched {} of {} records (sort: {})",
        view.len(),
        catalog.len(),
        query.sort
    );
    view
}

/// The filter predicate: a record is included iff every clause holds.
///
/// `needle` is the pre-lowercased search text, computed once per [`apply`]
/// call rather than per record.
fn matches(record: &MovieRecord, query: &Query, needle: &str) -> bool {
    let search_hit = needle.is_empty()
        || record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle);

    search_hit
        && query.genre.as_deref().is_none_or(|g| record.genre == g)
        && query.country.as_deref().is_none_or(|c| record.country == c)
        && query
            .availability
            .as_deref()
            .is_none_or(|a| record.availability == a)
        && in_range(record.year, query.year_range)
        && in_range(record.critic_score, query.critic_range)
        && in_range(record.audience_score, query.audience_range)
}

/// Inclusive on both bounds.
fn in_range(value: i32, (min, max): (i32, i32)) -> bool {
    min <= value && value <= max
}

/// Sort the view in place. `slice::sort_by` is stable, so records that
/// compare equal under the key keep their catalog order.
fn sort_view(view: &mut [&MovieRecord], key: SortKey) {
    view.sort_by(|a, b| match key {
        SortKey::YearDesc => b.year.cmp(&a.year),
        SortKey::YearAsc => a.year.cmp(&b.year),
        SortKey::TitleAsc => title_cmp(&a.title, &b.title),
        SortKey::TitleDesc => title_cmp(&b.title, &a.title),
        SortKey::CriticDesc => b.critic_score.cmp(&a.critic_score),
        SortKey::CriticAsc => a.critic_score.cmp(&b.critic_score),
        SortKey::AudienceDesc => b.audience_score.cmp(&a.audience_score),
        SortKey::AudienceAsc => a.audience_score.cmp(&b.audience_score),
    });
}

/// Case-insensitive title ordering with a byte-order tiebreak, so titles
/// differing only in case still order deterministically.
fn title_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, year: i32, critic: i32, audience: i32) -> MovieRecord {
        MovieRecord {
            year,
            title: title.to_string(),
            genre: "Thriller".to_string(),
            country: "USA".to_string(),
            description: String::new(),
            critic_score: critic,
            audience_score: audience,
            availability: "Netflix".to_string(),
            spoiler: String::new(),
        }
    }

    fn titles(view: &[&MovieRecord]) -> Vec<String> {
        view.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = vec![record("A", 2000, 80, 70), record("B", 2010, 90, 95)];
        let view = apply(&catalog, &Query::default());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let mut haunted = record("The Haunting", 1999, 70, 60);
        haunted.description = "A GHOST story.".to_string();
        let catalog = vec![haunted, record("Ghost Ship", 2002, 20, 40)];

        let query = Query {
            search: "ghost".to_string(),
            ..Query::default()
        };
        // Matches one via description, the other via title
        assert_eq!(apply(&catalog, &query).len(), 2);

        let query = Query {
            search: "GHOST SHIP".to_string(),
            ..Query::default()
        };
        assert_eq!(titles(&apply(&catalog, &query)), vec!["Ghost Ship"]);
    }

    #[test]
    fn test_facet_selection_is_exact_and_case_sensitive() {
        let mut a = record("A", 2000, 80, 70);
        a.genre = "Horror".to_string();
        let b = record("B", 2010, 90, 95);
        let catalog = vec![a, b];

        let query = Query {
            genre: Some("Horror".to_string()),
            ..Query::default()
        };
        assert_eq!(titles(&apply(&catalog, &query)), vec!["A"]);

        // No case folding for facet values
        let query = Query {
            genre: Some("horror".to_string()),
            ..Query::default()
        };
        assert!(apply(&catalog, &query).is_empty());
    }

    #[test]
    fn test_filter_is_a_conjunction() {
        let mut a = record("A", 2000, 80, 70);
        a.genre = "Horror".to_string();
        let catalog = vec![a];

        // Genre matches but the critic range excludes the record
        let query = Query {
            genre: Some("Horror".to_string()),
            critic_range: (90, 100),
            ..Query::default()
        };
        assert!(apply(&catalog, &query).is_empty());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let catalog = vec![record("A", 2000, 80, 70)];

        // Exactly on both bounds: included
        let query = Query {
            critic_range: (80, 80),
            ..Query::default()
        };
        assert_eq!(apply(&catalog, &query).len(), 1);

        // One unit outside either bound: excluded
        let query = Query {
            critic_range: (81, 100),
            ..Query::default()
        };
        assert!(apply(&catalog, &query).is_empty());

        let query = Query {
            critic_range: (0, 79),
            ..Query::default()
        };
        assert!(apply(&catalog, &query).is_empty());
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let catalog = vec![record("A", 2000, 80, 70)];
        let query = Query {
            year_range: (2000, 2000),
            ..Query::default()
        };
        assert_eq!(apply(&catalog, &query).len(), 1);

        let query = Query {
            year_range: (2001, 2100),
            ..Query::default()
        };
        assert!(apply(&catalog, &query).is_empty());
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // Same year, arbitrary differing fields: catalog order must survive
        let catalog = vec![
            record("First", 2005, 50, 50),
            record("Second", 2005, 90, 90),
            record("Third", 2005, 70, 70),
        ];
        let view = apply(&catalog, &Query::default());
        assert_eq!(titles(&view), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_sort_by_each_key() {
        let catalog = vec![
            record("Bravo", 2010, 60, 95),
            record("alpha", 2000, 90, 70),
        ];

        let sorted = |key| {
            let query = Query {
                sort: key,
                ..Query::default()
            };
            titles(&apply(&catalog, &query))
        };

        assert_eq!(sorted(SortKey::YearDesc), vec!["Bravo", "alpha"]);
        assert_eq!(sorted(SortKey::YearAsc), vec!["alpha", "Bravo"]);
        // Case-insensitive: "alpha" sorts before "Bravo"
        assert_eq!(sorted(SortKey::TitleAsc), vec!["alpha", "Bravo"]);
        assert_eq!(sorted(SortKey::TitleDesc), vec!["Bravo", "alpha"]);
        assert_eq!(sorted(SortKey::CriticDesc), vec!["alpha", "Bravo"]);
        assert_eq!(sorted(SortKey::CriticAsc), vec!["Bravo", "alpha"]);
        assert_eq!(sorted(SortKey::AudienceDesc), vec!["Bravo", "alpha"]);
        assert_eq!(sorted(SortKey::AudienceAsc), vec!["alpha", "Bravo"]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = vec![
            record("C", 2005, 70, 70),
            record("A", 2005, 90, 60),
            record("B", 1995, 50, 80),
        ];
        let query = Query {
            sort: SortKey::CriticDesc,
            ..Query::default()
        };

        let first = titles(&apply(&catalog, &query));
        let second = titles(&apply(&catalog, &query));
        assert_eq!(first, second);
    }

    #[test]
    fn test_needle_is_trimmed() {
        let catalog = vec![record("Parasite", 2019, 99, 90)];
        let query = Query {
            search: "  parasite  ".to_string(),
            ..Query::default()
        };
        assert_eq!(apply(&catalog, &query).len(), 1);
    }
}
