//! Fixed catalog loaded at startup.

use crate::model::MovieRecord;

/// The six movies every fresh process starts with, in catalog order.
pub fn default_catalog() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new(
            "1",
            "The Shawshank Redemption",
            1994,
            "Drama",
            "https://via.placeholder.com/300x450/667eea/ffffff?text=Shawshank",
            "Two imprisoned men bond over years, finding redemption through acts of common decency.",
        ),
        MovieRecord::new(
            "2",
            "The Godfather",
            1972,
            "Crime",
            "https://via.placeholder.com/300x450/764ba2/ffffff?text=Godfather",
            "The aging patriarch of an organized crime dynasty transfers control to his reluctant son.",
        ),
        MovieRecord::new(
            "3",
            "The Dark Knight",
            2008,
            "Action",
            "https://via.placeholder.com/300x450/f093fb/ffffff?text=Dark+Knight",
            "Batman faces the Joker, a criminal mastermind who wants to plunge Gotham into anarchy.",
        ),
        MovieRecord::new(
            "4",
            "Pulp Fiction",
            1994,
            "Crime",
            "https://via.placeholder.com/300x450/4facfe/ffffff?text=Pulp+Fiction",
            "The lives of two mob hitmen, a boxer, and a pair of diner bandits intertwine.",
        ),
        MovieRecord::new(
            "5",
            "Forrest Gump",
            1994,
            "Drama",
            "https://via.placeholder.com/300x450/00f2fe/ffffff?text=Forrest+Gump",
            "The presidencies of Kennedy and Johnson unfold through the perspective of an Alabama man.",
        ),
        MovieRecord::new(
            "6",
            "Inception",
            2010,
            "Sci-Fi",
            "https://via.placeholder.com/300x450/43e97b/ffffff?text=Inception",
            "A thief who steals corporate secrets through dream-sharing technology.",
        ),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_ordered() {
        let ids: Vec<_> = default_catalog().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn seed_starts_unrated() {
        assert!(
            default_catalog()
                .iter()
                .all(|m| m.ratings.is_empty() && m.reviews.is_empty() && !m.title.is_empty())
        );
    }
}
