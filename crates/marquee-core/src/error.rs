//! Catalog error type.
//!
//! The `Display` text of each variant is the exact message shown to API
//! clients, so the HTTP layer can forward it without rewording.

use thiserror::Error;

/// Every way a catalog operation can be refused.
///
/// All variants are raised before any mutation, so an error never leaves a
/// record half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No record exists under the requested id.
    #[error("Movie not found")]
    NotFound { id: String },

    /// The rating was missing, non-numeric, or outside `[1, 5]`.
    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    /// The review text was missing or whitespace only.
    #[error("Review text is required")]
    InvalidReview,
}

impl CatalogError {
    pub(crate) fn not_found(id: &str) -> Self {
        CatalogError::NotFound { id: id.to_owned() }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_are_client_facing() {
        assert_eq!(CatalogError::not_found("42").to_string(), "Movie not found");
        assert_eq!(
            CatalogError::InvalidRating.to_string(),
            "Rating must be between 1 and 5"
        );
        assert_eq!(CatalogError::InvalidReview.to_string(), "Review text is required");
    }
}
