//! Module grade calculator
//!
//! Turns a module's assessments into its current grade, completion state and
//! the weighting figures the projection engine needs.
//!
//! Weightings are percentages of the module but are not assumed to sum to
//! 100; every figure here normalises by the weightings actually present.
//! An assessment counts as graded when it has a finite score. Its
//! `is_completed` flag only records submission and never affects grading.

use crate::core::aggregate::{effective_weight, WeightedSum};
use crate::core::models::{Assessment, Module};

/// Full weighting of a module, in percent
pub const FULL_WEIGHTING: f64 = 100.0;

/// Score of a graded assessment, `None` when ungraded
#[must_use]
pub fn graded_score(assessment: &Assessment) -> Option<f64> {
    assessment.score.filter(|s| s.is_finite())
}

fn graded(module: &Module) -> impl Iterator<Item = (f64, f64)> + '_ {
    module
        .assessments
        .iter()
        .filter_map(|a| graded_score(a).map(|score| (score, a.weighting)))
}

/// Sum of all assessment weightings
#[must_use]
pub fn total_weighting(module: &Module) -> f64 {
    module
        .assessments
        .iter()
        .map(|a| effective_weight(a.weighting))
        .sum()
}

/// Sum of the weightings of graded assessments
#[must_use]
pub fn completed_weighting(module: &Module) -> f64 {
    graded(module).map(|(_, w)| effective_weight(w)).sum()
}

/// Current grade over graded work only.
///
/// Divides by the graded weighting, not by 100, so a module graded only on a
/// 40%-weighted assessment reports that assessment's score. `None` until some
/// positively weighted assessment is graded.
#[must_use]
pub fn current_grade(module: &Module) -> Option<f64> {
    graded(module).collect::<WeightedSum>().average()
}

/// Whether the module is finished: it has assessments and every one is graded
#[must_use]
pub fn is_completed(module: &Module) -> bool {
    !module.assessments.is_empty()
        && module
            .assessments
            .iter()
            .all(|a| graded_score(a).is_some())
}

/// Graded weighting as a fraction (0-1) of total weighting; 0 when the module
/// carries no weighting at all
#[must_use]
pub fn completion_percentage(module: &Module) -> f64 {
    let total = total_weighting(module);
    if total > 0.0 {
        completed_weighting(module) / total
    } else {
        0.0
    }
}

/// Weighting still to be earned: `max(0, 100 - completed_weighting)`, or 0
/// once every assessment is graded
#[must_use]
pub fn remaining_weighting(module: &Module) -> f64 {
    if is_completed(module) {
        return 0.0;
    }
    (FULL_WEIGHTING - completed_weighting(module)).max(0.0)
}

/// Weighting not yet assigned to any assessment: `max(0, 100 - total_weighting)`
#[must_use]
pub fn unallocated_weighting(module: &Module) -> f64 {
    (FULL_WEIGHTING - total_weighting(module)).max(0.0)
}

/// Marks already banked toward the module, `sum(score * weighting / 100)`
#[must_use]
pub fn earned_points(module: &Module) -> f64 {
    graded(module)
        .map(|(score, w)| score * effective_weight(w) / FULL_WEIGHTING)
        .sum()
}

/// Snapshot of every module-level figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleGrade {
    /// Current grade over graded work
    pub current_grade: Option<f64>,
    /// Weighting of graded assessments
    pub completed_weighting: f64,
    /// Weighting of all assessments
    pub total_weighting: f64,
    /// Graded fraction of total weighting (0-1)
    pub completion: f64,
    /// Whether every assessment is graded
    pub is_completed: bool,
    /// Weighting still to be earned toward 100
    pub remaining_weighting: f64,
    /// Marks already banked
    pub earned_points: f64,
}

impl ModuleGrade {
    /// Compute all figures for a module
    #[must_use]
    pub fn of(module: &Module) -> Self {
        Self {
            current_grade: current_grade(module),
            completed_weighting: completed_weighting(module),
            total_weighting: total_weighting(module),
            completion: completion_percentage(module),
            is_completed: is_completed(module),
            remaining_weighting: remaining_weighting(module),
            earned_points: earned_points(module),
        }
    }
}
