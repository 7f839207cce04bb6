//! Catalog store.
//!
//! [`CatalogStore`] is the only way to read or change movie records.
//! [`MemoryCatalog`] keeps everything in process memory; a durable backend
//! would implement the same trait and be swapped in at startup.
//!
//! Every read returns owned [`MovieView`]s, never a reference into the
//! store, so callers cannot mutate a record behind the store's back.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::CatalogError;
use crate::model::{MovieRecord, MovieView, RatingSummary, Review, ReviewResult};
use crate::search::SearchQuery;
use crate::validation;

pub trait CatalogStore: std::fmt::Debug + Send + Sync + 'static {
    /// All movies, highest average rating first. Equal averages keep catalog
    /// order.
    fn list_movies(&self) -> Vec<MovieView>;

    fn get_movie(&self, id: &str) -> Result<MovieView, CatalogError>;

    /// Append a standalone rating and return the recomputed aggregate.
    fn rate_movie(&self, id: &str, rating: Option<f64>) -> Result<RatingSummary, CatalogError>;

    /// Append a review. Its rating is also appended to the movie's ratings.
    fn add_review(
        &self,
        id: &str,
        name: Option<String>,
        text: Option<String>,
        rating: Option<f64>,
    ) -> Result<ReviewResult, CatalogError>;

    /// Movies whose title or genre contains `query`, ignoring case, in catalog
    /// order. An empty query matches nothing.
    fn search_movies(&self, query: &str) -> Vec<MovieView>;
}

#[derive(Debug, Default)]
struct Catalog {
    /// Records in catalog (seed) order.
    records: Vec<MovieRecord>,
    /// Movie id -> position in `records`.
    index: HashMap<String, usize>,
}

impl Catalog {
    fn find_mut(&mut self, id: &str) -> Result<&mut MovieRecord, CatalogError> {
        let pos = *self.index.get(id).ok_or_else(|| CatalogError::not_found(id))?;
        Ok(&mut self.records[pos])
    }

    fn find(&self, id: &str) -> Result<&MovieRecord, CatalogError> {
        let pos = *self.index.get(id).ok_or_else(|| CatalogError::not_found(id))?;
        Ok(&self.records[pos])
    }
}

/// In-process catalog behind a single reader/writer lock.
///
/// Writers validate and append while holding the write lock, so readers
/// never observe a half-applied submission.
pub struct MemoryCatalog {
    inner: RwLock<Catalog>,
}

impl std::fmt::Debug for MemoryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MemoryCatalog({} movies)", self.read().records.len())
    }
}

impl MemoryCatalog {
    /// Build a catalog from seed records, keeping their order.
    ///
    /// A record whose id was already seen is dropped.
    pub fn new(records: impl IntoIterator<Item = MovieRecord>) -> Self {
        let mut catalog = Catalog::default();
        for record in records {
            if catalog.index.contains_key(&record.id) {
                warn!(movie_id = %record.id, "duplicate movie id in seed; keeping the first");
                continue;
            }
            catalog.index.insert(record.id.clone(), catalog.records.len());
            catalog.records.push(record);
        }
        Self { inner: RwLock::new(catalog) }
    }

    /// Catalog preloaded with [`crate::seed::default_catalog`].
    pub fn with_default_catalog() -> Self {
        Self::new(crate::seed::default_catalog())
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Appends are single-step; a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogStore for MemoryCatalog {
    fn list_movies(&self) -> Vec<MovieView> {
        let mut views: Vec<MovieView> = self.read().records.iter().map(MovieRecord::to_view).collect();
        // `sort_by` is stable: ties stay in catalog order.
        views.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
        views
    }

    fn get_movie(&self, id: &str) -> Result<MovieView, CatalogError> {
        self.read().find(id).map(MovieRecord::to_view)
    }

    fn rate_movie(&self, id: &str, rating: Option<f64>) -> Result<RatingSummary, CatalogError> {
        let mut catalog = self.write();
        let record = catalog.find_mut(id)?;
        let rating = validation::validate_rating(rating).inspect_err(|_| {
            debug!(movie_id = %id, ?rating, "rating rejected");
        })?;

        record.ratings.push(rating);
        let summary = record.rating_summary();
        info!(
            movie_id = %id,
            rating,
            average_rating = summary.average_rating,
            total_ratings = summary.total_ratings,
            "rating recorded"
        );
        Ok(summary)
    }

    fn add_review(
        &self,
        id: &str,
        name: Option<String>,
        text: Option<String>,
        rating: Option<f64>,
    ) -> Result<ReviewResult, CatalogError> {
        let mut catalog = self.write();
        let record = catalog.find_mut(id)?;
        let text = validation::validate_review_text(text).inspect_err(|_| {
            debug!(movie_id = %id, "review rejected: blank text");
        })?;
        let rating = validation::validate_rating(rating).inspect_err(|_| {
            debug!(movie_id = %id, ?rating, "review rejected: invalid rating");
        })?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            name: validation::reviewer_name(name),
            review: text,
            rating,
            timestamp: Utc::now(),
        };
        record.reviews.push(review.clone());
        record.ratings.push(rating);

        let total_reviews = record.reviews.len();
        info!(
            movie_id = %id,
            review_id = %review.id,
            total_reviews,
            total_ratings = record.ratings.len(),
            "review recorded"
        );
        Ok(ReviewResult { review, total_reviews })
    }

    fn search_movies(&self, query: &str) -> Vec<MovieView> {
        let Some(query) = SearchQuery::parse(query) else {
            return Vec::new();
        };
        self.read()
            .records
            .iter()
            .filter(|record| query.matches(record))
            .map(MovieRecord::to_view)
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
