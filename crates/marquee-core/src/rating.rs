//! Rating aggregation.

/// Arithmetic mean of `ratings`, rounded to one decimal place.
///
/// Rounding is half-to-even on the scaled value (`4.25` becomes `4.2`,
/// `4.75` becomes `4.8`). An empty list averages to `0.0`.
pub fn average_rating(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    round_one_decimal(mean)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
