//! Catalog entities and the read-only projections handed to callers.

use chrono::{DateTime, Utc};

use crate::rating;

/// One catalog item together with everything submitted against it.
///
/// `ratings` and `reviews` only ever grow; nothing edits or removes an
/// element once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    /// Poster image URI.
    pub poster: String,
    pub description: String,
    /// Every accepted rating in submission order, each within `[1, 5]`.
    pub ratings: Vec<f64>,
    pub reviews: Vec<Review>,
}

impl MovieRecord {
    /// Build a record with no ratings or reviews yet.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        poster: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            genre: genre.into(),
            poster: poster.into(),
            description: description.into(),
            ratings: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Snapshot this record with its derived aggregates attached.
    pub fn to_view(&self) -> MovieView {
        MovieView {
            id: self.id.clone(),
            title: self.title.clone(),
            year: self.year,
            genre: self.genre.clone(),
            poster: self.poster.clone(),
            description: self.description.clone(),
            ratings: self.ratings.clone(),
            reviews: self.reviews.clone(),
            average_rating: rating::average_rating(&self.ratings),
            total_ratings: self.ratings.len(),
            total_reviews: self.reviews.len(),
        }
    }

    pub(crate) fn rating_summary(&self) -> RatingSummary {
        RatingSummary {
            average_rating: rating::average_rating(&self.ratings),
            total_ratings: self.ratings.len(),
        }
    }
}

/// A text review left on a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    /// UUID v4, unique within the movie's review list.
    pub id: String,
    /// Reviewer display name, stored verbatim.
    pub name: String,
    /// Review body, stored verbatim (not trimmed).
    pub review: String,
    pub rating: f64,
    pub timestamp: DateTime<Utc>,
}

/// Owned copy of a [`MovieRecord`] plus derived fields.
///
/// Mutating a view never reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieView {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub poster: String,
    pub description: String,
    pub ratings: Vec<f64>,
    pub reviews: Vec<Review>,
    /// Mean rating rounded to one decimal, `0.0` when unrated.
    pub average_rating: f64,
    pub total_ratings: usize,
    pub total_reviews: usize,
}

/// Outcome of a standalone rating submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average_rating: f64,
    pub total_ratings: usize,
}

/// Outcome of a review submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewResult {
    pub review: Review,
    pub total_reviews: usize,
}
