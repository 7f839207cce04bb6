//! Movie catalog routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use marquee_core::CatalogStore;
use tracing::debug;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::movies::{
    self, AddReviewRequest, AddReviewResponse, ErrorResponse, MovieDetailResponse,
    MovieListResponse, MovieResponse, RateMovieRequest, RateMovieResponse, ReviewResponse,
    SearchParams,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_movies, search_movies, get_movie, rate_movie, add_review),
    components(schemas(
        MovieResponse,
        ReviewResponse,
        MovieListResponse,
        MovieDetailResponse,
        RateMovieRequest,
        RateMovieResponse,
        AddReviewRequest,
        AddReviewResponse,
        ErrorResponse,
    ))
)]
pub struct MoviesApi;

/// Register movie routes (nested under `/api`).
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/search", get(search_movies))
        .route("/movies/{id}", get(get_movie))
        .route("/movies/{id}/rate", post(rate_movie))
        .route("/movies/{id}/review", post(add_review))
}

/// Map an unreadable body to an error, reporting an unknown movie first.
fn body_error(catalog: &dyn CatalogStore, id: &str, rejection: JsonRejection) -> ServerError {
    match catalog.get_movie(id) {
        Err(e) => e.into(),
        Ok(_) => {
            debug!(movie_id = %id, error = %rejection, "unreadable request body");
            ServerError::BadRequest(rejection.body_text())
        }
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    responses(
        (status = 200, description = "All movies, highest average rating first", body = MovieListResponse),
    )
)]
pub async fn list_movies(State(state): State<Arc<AppState>>) -> Json<MovieListResponse> {
    Json(state.catalog.list_movies().into())
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie details", body = MovieDetailResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MovieDetailResponse>, ServerError> {
    let movie = state.catalog.get_movie(&id)?;
    Ok(Json(MovieDetailResponse { movie: movie.into() }))
}

#[utoipa::path(
    post,
    path = "/api/movies/{id}/rate",
    tag = "movies",
    params(("id" = String, Path, description = "Movie id")),
    request_body = RateMovieRequest,
    responses(
        (status = 200, description = "Rating recorded", body = RateMovieResponse),
        (status = 400, description = "Rating missing or outside [1, 5]", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
pub async fn rate_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<RateMovieRequest>, JsonRejection>,
) -> Result<Json<RateMovieResponse>, ServerError> {
    let Json(req) = payload.map_err(|rejection| body_error(state.catalog.as_ref(), &id, rejection))?;
    let summary = state
        .catalog
        .rate_movie(&id, movies::numeric(req.rating.as_ref()))?;
    Ok(Json(summary.into()))
}

#[utoipa::path(
    post,
    path = "/api/movies/{id}/review",
    tag = "movies",
    params(("id" = String, Path, description = "Movie id")),
    request_body = AddReviewRequest,
    responses(
        (status = 200, description = "Review recorded", body = AddReviewResponse),
        (status = 400, description = "Blank review text or invalid rating", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
pub async fn add_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<AddReviewRequest>, JsonRejection>,
) -> Result<Json<AddReviewResponse>, ServerError> {
    let Json(req) = payload.map_err(|rejection| body_error(state.catalog.as_ref(), &id, rejection))?;
    let result = state.catalog.add_review(
        &id,
        movies::reviewer_name(req.name),
        movies::text(req.review),
        movies::numeric(req.rating.as_ref()),
    )?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/api/movies/search",
    tag = "movies",
    params(SearchParams),
    responses(
        (status = 200, description = "Movies whose title or genre matches, in catalog order", body = MovieListResponse),
    )
)]
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<MovieListResponse> {
    let query = params.q.unwrap_or_default();
    Json(state.catalog.search_movies(&query).into())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
