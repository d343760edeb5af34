//! Dashboard statistics derived from a student record

use crate::core::conversion::normalize;
use crate::core::models::{GradingSystem, Student};
use crate::core::module_grade::is_completed;
use crate::core::rollup::{completed_credits, total_credits, year_average};
use std::fmt;

/// Grade brackets, highest first, with their inclusive lower bounds
pub const GRADE_BRACKETS: [(f64, &str); 6] = [
    (90.0, "90-100%"),
    (80.0, "80-89%"),
    (70.0, "70-79%"),
    (60.0, "60-69%"),
    (50.0, "50-59%"),
    (40.0, "40-49%"),
];

/// Bracket for grades below every entry of [`GRADE_BRACKETS`]
pub const BELOW_BRACKETS: &str = "Below 40%";

fn bracket_for(grade: f64) -> &'static str {
    GRADE_BRACKETS
        .iter()
        .find(|(lower, _)| grade >= *lower)
        .map_or(BELOW_BRACKETS, |(_, label)| *label)
}

/// Count percentage grades per bracket. Every bracket is reported, highest
/// first, including empty ones. Non-finite grades are skipped.
pub fn grade_distribution<I>(grades: I) -> Vec<(&'static str, usize)>
where
    I: IntoIterator<Item = f64>,
{
    let mut counts: Vec<(&'static str, usize)> = GRADE_BRACKETS
        .iter()
        .map(|(_, label)| (*label, 0))
        .chain(std::iter::once((BELOW_BRACKETS, 0)))
        .collect();

    for grade in grades.into_iter().filter(|g| g.is_finite()) {
        let bracket = bracket_for(grade);
        if let Some(entry) = counts.iter_mut().find(|(label, _)| *label == bracket) {
            entry.1 += 1;
        }
    }
    counts
}

/// Percentage (0-100) of assessments in the record that are graded;
/// `None` when the record has no assessments
#[must_use]
pub fn assessment_completion_rate(student: &Student) -> Option<f64> {
    let (graded, total) = student
        .modules()
        .flat_map(|m| m.assessments.iter())
        .fold((0_u32, 0_u32), |(graded, total), a| {
            (graded + u32::from(a.is_graded()), total + 1)
        });

    if total == 0 {
        None
    } else {
        Some(f64::from(graded) / f64::from(total) * 100.0)
    }
}

/// Direction of the latest year-on-year change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Latest year is clearly higher
    Up,
    /// Latest year is clearly lower
    Down,
    /// Within the margin
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Change needed before a trend counts as up or down
#[must_use]
pub const fn trend_margin(system: GradingSystem) -> f64 {
    match system {
        GradingSystem::Percentage => 2.0,
        GradingSystem::FourPoint => 0.1,
    }
}

/// Compare the two most recent years (by level) that have an average.
/// Averages are compared in the student's grading system.
/// `None` with fewer than two such years.
#[must_use]
pub fn year_trend(student: &Student) -> Option<Trend> {
    let system = student.grading_system;
    let mut averages: Vec<(u32, f64)> = student
        .academic_years
        .iter()
        .filter_map(|y| {
            year_average(y).map(|avg| (y.level, normalize(avg, GradingSystem::Percentage, system)))
        })
        .collect();
    averages.sort_by_key(|(level, _)| *level);

    let [.., (_, previous), (_, latest)] = averages.as_slice() else {
        return None;
    };
    let margin = trend_margin(system);

    Some(if *latest > previous + margin {
        Trend::Up
    } else if *latest < previous - margin {
        Trend::Down
    } else {
        Trend::Stable
    })
}

/// Whole-record progress counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Number of modules
    pub total_modules: usize,
    /// Modules with every assessment graded
    pub completed_modules: usize,
    /// Sum of module credits
    pub total_credits: u32,
    /// Credits from completed modules
    pub completed_credits: u32,
}

impl ProgressSummary {
    /// Count progress across every year
    #[must_use]
    pub fn of(student: &Student) -> Self {
        Self {
            total_modules: student.modules().count(),
            completed_modules: student.modules().filter(|m| is_completed(m)).count(),
            total_credits: student.academic_years.iter().map(total_credits).sum(),
            completed_credits: student.academic_years.iter().map(completed_credits).sum(),
        }
    }

    /// Modules not yet completed
    #[must_use]
    pub const fn remaining_modules(&self) -> usize {
        self.total_modules.saturating_sub(self.completed_modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AcademicYear, Assessment, AssessmentKind, Module};

    fn module(code: &str, scores: &[Option<f64>], credits: u32) -> Module {
        let mut m = Module::new(code.to_string(), code.to_string(), credits);
        let weight = 100.0 / f64::from(u32::try_from(scores.len()).unwrap_or(1).max(1));
        for score in scores {
            let a = Assessment::new("A".to_string(), AssessmentKind::Exam, weight);
            m.add_assessment(match score {
                Some(s) => a.with_score(*s),
                None => a,
            });
        }
        m
    }

    fn year(level: u32, grade: f64) -> AcademicYear {
        AcademicYear::new(format!("Year {level}"), level, 1.0)
            .with_module(module("M", &[Some(grade)], 20))
    }

    #[test]
    fn test_grade_distribution() {
        let dist = grade_distribution([95.0, 90.0, 72.5, 71.0, 39.9, 40.0, f64::NAN]);

        assert_eq!(dist.len(), 7);
        assert_eq!(dist[0], ("90-100%", 2));
        assert_eq!(dist[2], ("70-79%", 2));
        assert_eq!(dist[3], ("60-69%", 0));
        assert_eq!(dist[5], ("40-49%", 1));
        assert_eq!(dist[6], ("Below 40%", 1));
    }

    #[test]
    fn test_assessment_completion_rate() {
        let student = Student::new("Jo".to_string(), GradingSystem::Percentage).with_year(
            AcademicYear::new("Year 1".to_string(), 1, 1.0)
                .with_module(module("A", &[Some(50.0), None], 20))
                .with_module(module("B", &[Some(60.0), Some(70.0)], 20)),
        );
        let rate = assessment_completion_rate(&student).unwrap();
        assert!((rate - 75.0).abs() < 1e-9);

        let empty = Student::new("Jo".to_string(), GradingSystem::Percentage);
        assert_eq!(assessment_completion_rate(&empty), None);
    }

    #[test]
    fn test_year_trend() {
        let up = Student::new("Jo".to_string(), GradingSystem::Percentage)
            .with_year(year(3, 68.0))
            .with_year(year(2, 60.0));
        assert_eq!(year_trend(&up), Some(Trend::Up));

        let stable = Student::new("Jo".to_string(), GradingSystem::Percentage)
            .with_year(year(1, 60.0))
            .with_year(year(2, 61.5));
        assert_eq!(year_trend(&stable), Some(Trend::Stable));

        let down = Student::new("Jo".to_string(), GradingSystem::FourPoint)
            .with_year(year(1, 90.0))
            .with_year(year(2, 84.0));
        assert_eq!(year_trend(&down), Some(Trend::Down));

        let single = Student::new("Jo".to_string(), GradingSystem::Percentage)
            .with_year(year(1, 60.0));
        assert_eq!(year_trend(&single), None);
    }

    #[test]
    fn test_progress_summary() {
        let student = Student::new("Jo".to_string(), GradingSystem::Percentage).with_year(
            AcademicYear::new("Year 1".to_string(), 1, 1.0)
                .with_module(module("A", &[Some(50.0), None], 20))
                .with_module(module("B", &[Some(60.0)], 40)),
        );
        let progress = ProgressSummary::of(&student);

        assert_eq!(progress.total_modules, 2);
        assert_eq!(progress.completed_modules, 1);
        assert_eq!(progress.total_credits, 60);
        assert_eq!(progress.completed_credits, 40);
        assert_eq!(progress.remaining_modules(), 1);
    }
}
