//! Year and overall aggregation
//!
//! Module grades roll up into a credit-weighted year average, and year
//! averages roll up into a multiplier-weighted overall average. Modules with
//! no graded work, and years with no average or a zero multiplier, are left
//! out of both numerator and denominator rather than counted as zero.

use crate::core::aggregate::weighted_average;
use crate::core::models::{AcademicYear, Student};
use crate::core::module_grade::{current_grade, is_completed};

/// Credit-weighted average of module grades for the year
#[must_use]
pub fn year_average(year: &AcademicYear) -> Option<f64> {
    weighted_average(
        year.modules
            .iter()
            .filter_map(|m| current_grade(m).map(|g| (g, f64::from(m.credits)))),
    )
}

/// Raw sum of module credits
#[must_use]
pub fn total_credits(year: &AcademicYear) -> u32 {
    year.modules.iter().map(|m| m.credits).sum()
}

/// Raw sum of credits for modules whose assessments are all graded
#[must_use]
pub fn completed_credits(year: &AcademicYear) -> u32 {
    year.modules
        .iter()
        .filter(|m| is_completed(m))
        .map(|m| m.credits)
        .sum()
}

/// Multiplier-weighted average of year averages.
///
/// Years with `weighting_multiplier <= 0` never contribute. `None` when no
/// counting year has a defined average.
#[must_use]
pub fn overall_average(student: &Student) -> Option<f64> {
    weighted_average(
        student
            .academic_years
            .iter()
            .filter(|y| y.counts_toward_overall())
            .filter_map(|y| year_average(y).map(|avg| (avg, y.weighting_multiplier))),
    )
}

/// Year-level figures
#[derive(Debug, Clone, PartialEq)]
pub struct YearRollup {
    /// Year name
    pub name: String,
    /// Credit-weighted average, if any module is graded
    pub average: Option<f64>,
    /// Sum of module credits
    pub total_credits: u32,
    /// Credits from fully graded modules
    pub completed_credits: u32,
    /// Weight in the overall average
    pub weighting_multiplier: f64,
}

impl YearRollup {
    /// Compute the figures for one year
    #[must_use]
    pub fn of(year: &AcademicYear) -> Self {
        Self {
            name: year.name.clone(),
            average: year_average(year),
            total_credits: total_credits(year),
            completed_credits: completed_credits(year),
            weighting_multiplier: year.weighting_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Assessment, AssessmentKind, GradingSystem, Module};

    const EPS: f64 = 1e-9;

    fn graded_module(code: &str, grade: Option<f64>, credits: u32) -> Module {
        let exam = Assessment::new("Exam".to_string(), AssessmentKind::Exam, 100.0);
        let exam = match grade {
            Some(g) => exam.with_score(g),
            None => exam,
        };
        Module::new(code.to_string(), code.to_string(), credits).with_assessment(exam)
    }

    fn year_with(name: &str, multiplier: f64, grade: f64) -> AcademicYear {
        AcademicYear::new(name.to_string(), 1, multiplier).with_module(graded_module(
            "M",
            Some(grade),
            20,
        ))
    }

    #[test]
    fn test_year_average_excludes_ungraded_modules() {
        let year = AcademicYear::new("Year 2".to_string(), 2, 1.0)
            .with_module(graded_module("A", Some(72.0), 20))
            .with_module(graded_module("B", Some(58.0), 20))
            .with_module(graded_module("C", None, 20));

        assert!((year_average(&year).unwrap() - 65.0).abs() < EPS);
        assert_eq!(total_credits(&year), 60);
        assert_eq!(completed_credits(&year), 40);
    }

    #[test]
    fn test_year_average_weights_by_credits() {
        let year = AcademicYear::new("Year 3".to_string(), 3, 1.0)
            .with_module(graded_module("A", Some(80.0), 40))
            .with_module(graded_module("B", Some(50.0), 20));

        assert!((year_average(&year).unwrap() - 70.0).abs() < EPS);
    }

    #[test]
    fn test_year_without_grades_has_no_average() {
        let year = AcademicYear::new("Year 1".to_string(), 1, 1.0)
            .with_module(graded_module("A", None, 20));
        assert_eq!(year_average(&year), None);
        assert_eq!(year_average(&AcademicYear::new("Empty".to_string(), 1, 1.0)), None);
    }

    #[test]
    fn test_zero_credit_modules_do_not_count() {
        let year = AcademicYear::new("Year 1".to_string(), 1, 1.0)
            .with_module(graded_module("A", Some(40.0), 0));
        assert_eq!(year_average(&year), None);
    }

    #[test]
    fn test_overall_average_ignores_foundation_year() {
        let student = Student::new("Alex".to_string(), GradingSystem::Percentage)
            .with_year(year_with("Foundation", 0.0, 50.0))
            .with_year(year_with("Year 2", 1.0, 65.0))
            .with_year(year_with("Year 3", 1.0, 74.0));

        assert!((overall_average(&student).unwrap() - 69.5).abs() < EPS);
    }

    #[test]
    fn test_overall_average_uses_multipliers() {
        let student = Student::new("Alex".to_string(), GradingSystem::Percentage)
            .with_year(year_with("Year 2", 1.0, 60.0))
            .with_year(year_with("Year 3", 2.0, 75.0));

        assert!((overall_average(&student).unwrap() - 70.0).abs() < EPS);
    }

    #[test]
    fn test_overall_average_undefined_without_counting_years() {
        let only_foundation = Student::new("Alex".to_string(), GradingSystem::Percentage)
            .with_year(year_with("Foundation", 0.0, 80.0));
        assert_eq!(overall_average(&only_foundation), None);

        let ungraded = Student::new("Alex".to_string(), GradingSystem::Percentage).with_year(
            AcademicYear::new("Year 1".to_string(), 1, 1.0).with_module(graded_module(
                "A", None, 20,
            )),
        );
        assert_eq!(overall_average(&ungraded), None);
        assert_eq!(
            overall_average(&Student::new("Empty".to_string(), GradingSystem::FourPoint)),
            None
        );
    }

    #[test]
    fn test_year_rollup() {
        let rollup = YearRollup::of(&year_with("Year 2", 1.0, 65.0));
        assert_eq!(rollup.name, "Year 2");
        assert_eq!(rollup.total_credits, 20);
        assert_eq!(rollup.completed_credits, 20);
        assert!((rollup.average.unwrap() - 65.0).abs() < EPS);
    }
}
