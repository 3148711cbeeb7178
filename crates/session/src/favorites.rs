//! Session-scoped favorite set.

use std::collections::HashSet;
use tracing::debug;

/// The set of favorited titles.
///
/// Keyed by title, the record's identity. Membership only; no ordering
/// guarantees, and nothing survives the session.
#[derive(Debug, Default)]
pub struct Favorites {
    titles: HashSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a title's membership. Returns `true` if the title is a
    /// favorite after the toggle.
    pub fn toggle(&mut self, title: &str) -> bool {
        if self.titles.remove(title) {
            debug!("unfavorited {title:?}");
            false
        } else {
            self.titles.insert(title.to_string());
            debug!("favorited {title:?}");
            true
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Iterate the favorited titles, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        assert!(!favorites.contains("Parasite"));

        assert!(favorites.toggle("Parasite"));
        assert!(favorites.contains("Parasite"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("Parasite"));
        assert!(!favorites.contains("Parasite"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_titles_are_independent() {
        let mut favorites = Favorites::new();
        favorites.toggle("Parasite");
        favorites.toggle("The Sixth Sense");
        favorites.toggle("Parasite");

        assert!(!favorites.contains("Parasite"));
        assert!(favorites.contains("The Sixth Sense"));
        assert_eq!(favorites.len(), 1);
    }
}
