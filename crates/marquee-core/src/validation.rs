//! Input rules for ratings and reviews.

use crate::error::CatalogError;

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 1.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 5.0;

/// Name recorded when a review arrives without a `name` field.
pub const ANONYMOUS_REVIEWER: &str = "Anonymous";

/// Accept a rating iff it is present and within `[1, 5]`, inclusive.
///
/// Fractional values are allowed. `NaN` never satisfies the range check.
pub fn validate_rating(rating: Option<f64>) -> Result<f64, CatalogError> {
    match rating {
        Some(value) if (MIN_RATING..=MAX_RATING).contains(&value) => Ok(value),
        _ => Err(CatalogError::InvalidRating),
    }
}

/// Accept review text iff it is present and not whitespace only.
///
/// The returned text is the original, untrimmed input.
pub fn validate_review_text(text: Option<String>) -> Result<String, CatalogError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(CatalogError::InvalidReview),
    }
}

/// Resolve the display name for a review.
///
/// Only a missing name falls back to [`ANONYMOUS_REVIEWER`]; an explicit
/// empty or blank name is kept as given.
pub fn reviewer_name(name: Option<String>) -> String {
    name.unwrap_or_else(|| ANONYMOUS_REVIEWER.to_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert_eq!(validate_rating(Some(1.0)), Ok(1.0));
        assert_eq!(validate_rating(Some(5.0)), Ok(5.0));
        assert_eq!(validate_rating(Some(3.5)), Ok(3.5));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        for bad in [0.0, 0.99, 5.01, 6.0, -3.0, f64::INFINITY] {
            assert_eq!(validate_rating(Some(bad)), Err(CatalogError::InvalidRating), "{bad}");
        }
    }

    #[test]
    fn missing_or_nan_rating_is_rejected() {
        assert_eq!(validate_rating(None), Err(CatalogError::InvalidRating));
        assert_eq!(validate_rating(Some(f64::NAN)), Err(CatalogError::InvalidRating));
    }

    #[test]
    fn review_text_must_have_content() {
        assert_eq!(validate_review_text(None), Err(CatalogError::InvalidReview));
        assert_eq!(validate_review_text(Some(String::new())), Err(CatalogError::InvalidReview));
        assert_eq!(
            validate_review_text(Some(" \t\n ".into())),
            Err(CatalogError::InvalidReview)
        );
    }

    #[test]
    fn review_text_is_kept_verbatim() {
        assert_eq!(
            validate_review_text(Some("  Loved it  ".into())),
            Ok("  Loved it  ".to_owned())
        );
    }

    #[test]
    fn name_defaults_only_when_missing() {
        assert_eq!(reviewer_name(None), "Anonymous");
        assert_eq!(reviewer_name(Some(String::new())), "");
        assert_eq!(reviewer_name(Some("  ".into())), "  ");
        assert_eq!(reviewer_name(Some("Ana".into())), "Ana");
    }
}
