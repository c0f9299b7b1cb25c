//! Scoring helpers shared with the analytics endpoints.
//!
//! These mirror the service's banding math so figures derived locally
//! (milestone completion, overall metric averages) agree with what the
//! service reports.

/// Normalize a raw score onto the 0-100 range.
///
/// Returns 0.0 when the scale is empty or inverted (`max <= min`).
#[must_use]
pub fn normalize_score(score: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    (((score - min) / (max - min)) * 100.0).clamp(0.0, 100.0)
}

/// Percentage of `numerator` over `denominator`, safe against zero division.
///
/// Rounded to one decimal place, the service's reporting precision.
#[must_use]
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() < f64::EPSILON {
        return 0.0;
    }
    round_one_decimal((numerator / denominator) * 100.0)
}

/// Mean of `values`, 0.0 for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
