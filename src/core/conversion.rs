//! Cross-system grade conversion
//!
//! The two directions use independently defined step tables and are not
//! inverses of each other. Percentages collapse onto one representative value
//! per step (100% maps to 4.0 and back to 98%). The `x.3` four-point values
//! sit just below the `x.33` edges of the reverse table, so 3.3 comes back as
//! 3.0. Both functions are total: values outside a table are clamped to its
//! extremes and NaN maps to the bottom step.

use crate::core::models::GradingSystem;

/// Percentage lower bounds and the four-point value they convert to,
/// highest first. Anything below the last bound converts to 0.0.
pub const PERCENTAGE_TO_FOUR_POINT: [(f64, f64); 11] = [
    (97.0, 4.0),
    (93.0, 3.7),
    (90.0, 3.3),
    (87.0, 3.0),
    (83.0, 2.7),
    (80.0, 2.3),
    (77.0, 2.0),
    (73.0, 1.7),
    (70.0, 1.3),
    (67.0, 1.0),
    (65.0, 0.7),
];

/// Four-point lower bounds and the representative percentage they convert
/// to, highest first. Negative or NaN values convert to 0.
pub const FOUR_POINT_TO_PERCENTAGE: [(f64, f64); 12] = [
    (3.97, 98.0),
    (3.67, 95.0),
    (3.33, 91.0),
    (3.0, 88.0),
    (2.67, 85.0),
    (2.33, 82.0),
    (2.0, 78.0),
    (1.67, 75.0),
    (1.33, 72.0),
    (1.0, 68.0),
    (0.67, 66.0),
    (0.0, 63.0),
];

fn step_lookup(table: &[(f64, f64)], value: f64, below: f64) -> f64 {
    table
        .iter()
        .find(|(lower, _)| value >= *lower)
        .map_or(below, |(_, out)| *out)
}

/// Convert a percentage to its four-point equivalent
#[must_use]
pub fn percentage_to_four_point(percentage: f64) -> f64 {
    step_lookup(&PERCENTAGE_TO_FOUR_POINT, percentage, 0.0)
}

/// Convert a four-point value to a representative percentage
#[must_use]
pub fn four_point_to_percentage(four_point: f64) -> f64 {
    step_lookup(&FOUR_POINT_TO_PERCENTAGE, four_point, 0.0)
}

/// Express `grade` (in `from`) in the `to` system.
///
/// Identity when the systems match, including for NaN.
#[must_use]
pub fn normalize(grade: f64, from: GradingSystem, to: GradingSystem) -> f64 {
    match (from, to) {
        (GradingSystem::Percentage, GradingSystem::FourPoint) => percentage_to_four_point(grade),
        (GradingSystem::FourPoint, GradingSystem::Percentage) => four_point_to_percentage(grade),
        _ => grade,
    }
}
