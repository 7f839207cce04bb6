//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::CatalogError;
use serde_json::json;
use thiserror::Error;

/// All errors that can occur in the marquee-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Rejected by the catalog (unknown movie or invalid submission).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The caller sent a body that could not be read as JSON.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Catalog(CatalogError::InvalidRating | CatalogError::InvalidReview) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let client_message = match &self {
            // Catalog messages are written for clients; pass them through.
            ServerError::Catalog(e) => e.to_string(),
            ServerError::BadRequest(m) => m.clone(),
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: ServerError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = render(CatalogError::NotFound { id: "9".into() }.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Movie not found");
    }

    #[tokio::test]
    async fn validation_errors_map_to_400() {
        let (status, body) = render(CatalogError::InvalidRating.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Rating must be between 1 and 5");

        let (status, body) = render(CatalogError::InvalidReview.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Review text is required");
    }

    #[tokio::test]
    async fn bad_request_passes_message_through() {
        let (status, body) = render(ServerError::BadRequest("expected value".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "expected value");
    }
}
