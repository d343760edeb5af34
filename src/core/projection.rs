//! Projection and prediction
//!
//! Best-case final grades and the score needed on outstanding work to reach a
//! target. Weightings are percentages of the module, as in
//! [`module_grade`](crate::core::module_grade).

use crate::core::aggregate::WeightedSum;
use crate::core::models::Module;
use crate::core::module_grade::{
    current_grade, earned_points, graded_score, remaining_weighting, FULL_WEIGHTING,
};

/// Best-case final grade: every remaining weighting scores 100.
///
/// `earned_points + remaining_weighting`. A module with nothing remaining
/// reports its current grade.
#[must_use]
pub fn projected_final_grade(module: &Module) -> f64 {
    let remaining = remaining_weighting(module);
    if remaining <= 0.0 {
        if let Some(grade) = current_grade(module) {
            return grade;
        }
    }
    earned_points(module) + remaining
}

/// Score needed on `remaining_weight` so the final weighted average over
/// `current_grades` plus the remaining work equals `target_grade`.
///
/// Solves `(sum(g*w) + x*r) / (sum(w) + r) = target` for `x`. Returns `None`
/// when nothing remains (`remaining_weight <= 0`). The result is not clamped:
/// above 100 the target is out of reach, below 0 it is already secured.
pub fn required_score_for_target<I>(
    current_grades: I,
    remaining_weight: f64,
    target_grade: f64,
) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    if !(remaining_weight.is_finite() && remaining_weight > 0.0) || !target_grade.is_finite() {
        return None;
    }
    let current: WeightedSum = current_grades.into_iter().collect();
    let total_weight = current.total_weight + remaining_weight;

    Some((target_grade * total_weight - current.weighted_total) / remaining_weight)
}

/// [`required_score_for_target`] for a module's graded assessments and
/// remaining weighting
#[must_use]
pub fn required_score_for_module(module: &Module, target_grade: f64) -> Option<f64> {
    let graded = module
        .assessments
        .iter()
        .filter_map(|a| graded_score(a).map(|score| (score, a.weighting)));
    required_score_for_target(graded, remaining_weighting(module), target_grade)
}

/// How a required score should be presented
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetOutlook {
    /// No weighting remains; compare the current grade with the target
    Locked,
    /// The target is met even with zero on the remaining work
    AlreadySecured(f64),
    /// The target needs this score (0-100) on the remaining work
    Achievable(f64),
    /// The target needs more than full marks
    NotAchievable(f64),
}

impl TargetOutlook {
    /// Classify a required score
    #[must_use]
    pub fn from_required(required: Option<f64>) -> Self {
        match required {
            None => Self::Locked,
            Some(x) if x < 0.0 => Self::AlreadySecured(x),
            Some(x) if x > FULL_WEIGHTING => Self::NotAchievable(x),
            Some(x) => Self::Achievable(x),
        }
    }

    /// Short description for display
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Locked => "No assessments remaining".to_string(),
            Self::AlreadySecured(_) => "Already secured".to_string(),
            Self::Achievable(x) => format!("Need {x:.1}% on remaining work"),
            Self::NotAchievable(x) => format!("Not achievable (needs {x:.1}%)"),
        }
    }
}
