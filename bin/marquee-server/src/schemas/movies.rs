//! Movie API types.
//!
//! Request bodies accept loosely-typed JSON so that a missing, `null` or
//! non-numeric rating reaches the catalog's validation instead of failing
//! deserialization.

use marquee_core::{MovieView, RatingSummary, Review, ReviewResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// A review as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: String,
    /// Reviewer display name (`"Anonymous"` when none was given).
    pub name: String,
    /// Review text.
    pub review: String,
    pub rating: f64,
    /// RFC 3339 submission time.
    pub timestamp: String,
}

/// A movie with its derived rating aggregates.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    /// Poster image URI.
    pub poster: String,
    pub description: String,
    /// Every rating in submission order.
    pub ratings: Vec<f64>,
    pub reviews: Vec<ReviewResponse>,
    /// Mean rating rounded to one decimal; `0` when unrated.
    pub average_rating: f64,
    pub total_ratings: usize,
    pub total_reviews: usize,
}

/// Response body for `GET /api/movies` and `GET /api/movies/search`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MovieListResponse {
    pub movies: Vec<MovieResponse>,
}

/// Response body for `GET /api/movies/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MovieDetailResponse {
    pub movie: MovieResponse,
}

/// Request body for `POST /api/movies/{id}/rate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RateMovieRequest {
    /// Star rating in `[1, 5]`.
    #[serde(default)]
    #[schema(value_type = f64)]
    pub rating: Option<Value>,
}

/// Response body for `POST /api/movies/{id}/rate`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RateMovieResponse {
    pub success: bool,
    pub average_rating: f64,
    pub total_ratings: usize,
}

/// Request body for `POST /api/movies/{id}/review`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddReviewRequest {
    /// Reviewer display name; defaults to `"Anonymous"` when omitted or
    /// `null`. Any string, including `""`, is kept verbatim.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    /// Review text; must contain non-whitespace characters.
    #[serde(default)]
    #[schema(value_type = String)]
    pub review: Option<Value>,
    /// Star rating in `[1, 5]`; also counted towards the movie's average.
    #[serde(default)]
    #[schema(value_type = f64)]
    pub rating: Option<Value>,
}

/// Response body for `POST /api/movies/{id}/review`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddReviewResponse {
    pub success: bool,
    pub review: ReviewResponse,
    pub total_reviews: usize,
}

/// Query string for `GET /api/movies/search`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of a title or genre.
    pub q: Option<String>,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// ── Payload decoding ──────────────────────────────────────────────────────────

/// Numeric JSON value as `f64`; anything else (strings, booleans) is `None`.
pub fn numeric(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

/// String JSON value; any other JSON type is `None`.
pub fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Reviewer name as handed to the catalog.
///
/// Only a string counts as a name, and it is passed through untouched so an
/// explicit `""` or `"  "` stays as given. An omitted field, `null` and other
/// JSON types carry no name text and become `None`, which the catalog records
/// as `"Anonymous"`.
pub fn reviewer_name(value: Option<Value>) -> Option<String> {
    text(value)
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            id: review.id,
            name: review.name,
            review: review.review,
            rating: review.rating,
            timestamp: review.timestamp.to_rfc3339(),
        }
    }
}

impl From<MovieView> for MovieResponse {
    fn from(view: MovieView) -> Self {
        MovieResponse {
            id: view.id,
            title: view.title,
            year: view.year,
            genre: view.genre,
            poster: view.poster,
            description: view.description,
            ratings: view.ratings,
            reviews: view.reviews.into_iter().map(ReviewResponse::from).collect(),
            average_rating: view.average_rating,
            total_ratings: view.total_ratings,
            total_reviews: view.total_reviews,
        }
    }
}

impl From<Vec<MovieView>> for MovieListResponse {
    fn from(views: Vec<MovieView>) -> Self {
        MovieListResponse {
            movies: views.into_iter().map(MovieResponse::from).collect(),
        }
    }
}

impl From<RatingSummary> for RateMovieResponse {
    fn from(summary: RatingSummary) -> Self {
        RateMovieResponse {
            success: true,
            average_rating: summary.average_rating,
            total_ratings: summary.total_ratings,
        }
    }
}

impl From<ReviewResult> for AddReviewResponse {
    fn from(result: ReviewResult) -> Self {
        AddReviewResponse {
            success: true,
            review: result.review.into(),
            total_reviews: result.total_reviews,
        }
    }
}
