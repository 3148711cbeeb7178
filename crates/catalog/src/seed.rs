//! Built-in fallback records.
//!
//! When the configured source is unreachable, malformed, or empty, the
//! loader serves this fixed seed set instead so there is always something
//! to render. Content is a design-time constant.

use crate::types::{Catalog, MovieRecord};

/// The fixed seed catalog used when the external source fails.
pub fn seed_catalog() -> Catalog {
    vec![
        MovieRecord {
            year: 1999,
            title: "The Sixth Sense".to_string(),
            genre: "Supernatural Drama".to_string(),
            country: "USA".to_string(),
            description: "A child psychologist tries to help a boy who sees spirits."
                .to_string(),
            critic_score: 86,
            audience_score: 90,
            availability: "Prime Video".to_string(),
            spoiler: "Dr. Crowe realises he is one of the ghosts the boy sees."
                .to_string(),
        },
        MovieRecord {
            year: 2019,
            title: "Parasite".to_string(),
            genre: "Thriller/Drama".to_string(),
            country: "South Korea".to_string(),
            description: "A poor family infiltrates a rich household with disastrous results."
                .to_string(),
            critic_score: 99,
            audience_score: 90,
            availability: "Hulu".to_string(),
            spoiler: "A man is secretly living in the Park family\u{2019}s basement bunker."
                .to_string(),
        },
    ]
}
