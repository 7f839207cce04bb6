//! Title / genre matching.

use crate::model::MovieRecord;

/// Lower-cased search needle, prepared once per query.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Returns `None` for an empty query, which matches nothing.
    pub fn parse(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self { needle: query.to_lowercase() })
    }

    /// A record matches when its title or its genre contains the needle,
    /// ignoring case.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        contains_ignore_case(&record.title, &self.needle)
            || contains_ignore_case(&record.genre, &self.needle)
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(title: &str, genre: &str) -> MovieRecord {
        MovieRecord::new("1", title, 2000, genre, "", "")
    }

    #[test]
    fn empty_query_is_none() {
        assert!(SearchQuery::parse("").is_none());
    }

    #[test]
    fn whitespace_query_is_a_literal_needle() {
        let q = SearchQuery::parse(" ").expect("non-empty query");
        assert!(q.matches(&record("The Godfather", "Crime")));
        assert!(!q.matches(&record("Inception", "Sci-Fi")));
    }

    #[test]
    fn matches_title_case_insensitively() {
        let q = SearchQuery::parse("DARK").expect("non-empty query");
        assert!(q.matches(&record("The Dark Knight", "Action")));
    }

    #[test]
    fn matches_genre() {
        let q = SearchQuery::parse("sci").expect("non-empty query");
        assert!(q.matches(&record("Inception", "Sci-Fi")));
    }

    #[test]
    fn substring_anywhere() {
        let q = SearchQuery::parse("ump").expect("non-empty query");
        assert!(q.matches(&record("Forrest Gump", "Drama")));
        assert!(!q.matches(&record("Pulp Fiction", "Crime")));
    }

    #[test]
    fn description_is_not_searched() {
        let mut r = record("Inception", "Sci-Fi");
        r.description = "dream-sharing".into();
        let q = SearchQuery::parse("dream").expect("non-empty query");
        assert!(!q.matches(&r));
    }
}
