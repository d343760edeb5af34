//! Report generation for student records
//!
//! [`StudentSummary`] gathers every computed figure for a record once; the
//! format implementations in [`formats`] only lay those figures out.
//!
//! Assessment scores are percentages under every grading system. Figures
//! shown in four-point terms are converted with
//! [`normalize`](crate::core::conversion::normalize) before they are
//! classified.

pub mod formats;

use crate::core::classification::{Classification, ClassificationScheme};
use crate::core::conversion::normalize;
use crate::core::models::{AcademicYear, GradingSystem, Module, Student};
use crate::core::module_grade::ModuleGrade;
use crate::core::projection::projected_final_grade;
use crate::core::rollup::{overall_average, YearRollup};
use crate::core::schedule::{overdue_count, upcoming_assessments};
use crate::core::statistics::{
    assessment_completion_rate, grade_distribution, year_trend, ProgressSummary, Trend,
};
use crate::debug;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Classify a percentage figure in the given system
fn classify_percentage(
    scheme: &ClassificationScheme,
    grade: Option<f64>,
    system: GradingSystem,
) -> Classification {
    scheme.classify(
        grade.map(|g| normalize(g, GradingSystem::Percentage, system)),
        system,
    )
}

/// Per-module figures
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSummary {
    /// Module code
    pub code: String,
    /// Module name
    pub name: String,
    /// Credit value
    pub credits: u32,
    /// Teaching term label
    pub term: String,
    /// Whether the module is compulsory
    pub is_core: bool,
    /// Grade calculator output
    pub grade: ModuleGrade,
    /// Best-case final grade
    pub projected_grade: f64,
    /// Classification of the current grade
    pub classification: Classification,
    /// Outstanding assessments past their due date
    pub overdue: usize,
}

impl ModuleSummary {
    fn build(
        module: &Module,
        scheme: &ClassificationScheme,
        system: GradingSystem,
        now: DateTime<Utc>,
    ) -> Self {
        let grade = ModuleGrade::of(module);
        Self {
            code: module.code.clone(),
            name: module.name.clone(),
            credits: module.credits,
            term: module.term.clone(),
            is_core: module.is_core,
            projected_grade: projected_final_grade(module),
            classification: classify_percentage(scheme, grade.current_grade, system),
            overdue: overdue_count(module, now),
            grade,
        }
    }
}

/// Per-year figures
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    /// Averages and credit counts
    pub rollup: YearRollup,
    /// Level of study
    pub level: u32,
    /// Whether this is the current year
    pub is_active: bool,
    /// Classification of the year average
    pub classification: Classification,
    /// Modules in record order
    pub modules: Vec<ModuleSummary>,
}

impl YearSummary {
    fn build(
        year: &AcademicYear,
        scheme: &ClassificationScheme,
        system: GradingSystem,
        now: DateTime<Utc>,
    ) -> Self {
        let rollup = YearRollup::of(year);
        Self {
            level: year.level,
            is_active: year.is_active,
            classification: classify_percentage(scheme, rollup.average, system),
            modules: year
                .modules
                .iter()
                .map(|m| ModuleSummary::build(m, scheme, system, now))
                .collect(),
            rollup,
        }
    }
}

/// An outstanding dated assessment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineSummary {
    /// Owning module code
    pub module_code: String,
    /// Assessment name
    pub assessment: String,
    /// Due date
    pub due_date: DateTime<Utc>,
    /// Whole days until due (negative when overdue)
    pub days_until_due: i64,
    /// Whether the due date has passed
    pub is_overdue: bool,
}

impl DeadlineSummary {
    /// Short relative description ("due in 3 days", "2 days overdue")
    #[must_use]
    pub fn describe(&self) -> String {
        match self.days_until_due {
            d if self.is_overdue && d == 0 => "overdue today".to_string(),
            d if self.is_overdue => format!("{} days overdue", d.unsigned_abs()),
            0 => "due today".to_string(),
            1 => "due tomorrow".to_string(),
            d => format!("due in {d} days"),
        }
    }
}

/// Everything a report shows about one student
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    /// Student name
    pub name: String,
    /// Student number, if recorded
    pub student_number: Option<String>,
    /// University
    pub university: String,
    /// Course of study
    pub course: String,
    /// Grading system of the record
    pub system: GradingSystem,
    /// Overall average as a percentage
    pub overall_average: Option<f64>,
    /// Classification of the overall average
    pub classification: Classification,
    /// Per-year figures
    pub years: Vec<YearSummary>,
    /// Credit and module counts
    pub progress: ProgressSummary,
    /// Percentage of assessments graded
    pub completion_rate: Option<f64>,
    /// Latest year-on-year movement
    pub trend: Option<Trend>,
    /// Module grades per bracket
    pub distribution: Vec<(&'static str, usize)>,
    /// Outstanding dated assessments, earliest first
    pub deadlines: Vec<DeadlineSummary>,
    /// When the summary was built
    pub generated_at: DateTime<Utc>,
}

impl StudentSummary {
    /// Summarise a record as of now
    #[must_use]
    pub fn build(student: &Student, scheme: &ClassificationScheme) -> Self {
        Self::build_at(student, scheme, Utc::now())
    }

    /// Summarise a record as of `now`
    #[must_use]
    pub fn build_at(student: &Student, scheme: &ClassificationScheme, now: DateTime<Utc>) -> Self {
        let system = student.grading_system;
        let overall = overall_average(student);
        let years: Vec<YearSummary> = student
            .academic_years
            .iter()
            .map(|y| YearSummary::build(y, scheme, system, now))
            .collect();
        let distribution = grade_distribution(
            years
                .iter()
                .flat_map(|y| y.modules.iter())
                .filter_map(|m| m.grade.current_grade),
        );
        let deadlines = upcoming_assessments(student, now)
            .into_iter()
            .map(|u| DeadlineSummary {
                module_code: u.module_code.to_string(),
                assessment: u.assessment.name.clone(),
                due_date: u.due_date,
                days_until_due: u.days_until_due,
                is_overdue: u.is_overdue,
            })
            .collect();

        debug!(
            "Summary for {}: {} years, overall {:?}",
            student.name,
            years.len(),
            overall
        );

        Self {
            name: student.name.clone(),
            student_number: student.student_number.clone(),
            university: student.university.clone(),
            course: student.course.clone(),
            system,
            overall_average: overall,
            classification: classify_percentage(scheme, overall, system),
            years,
            progress: ProgressSummary::of(student),
            completion_rate: assessment_completion_rate(student),
            trend: year_trend(student),
            distribution,
            deadlines,
            generated_at: now,
        }
    }

    /// Format a percentage figure for this record's grading system
    ///
    /// Four-point records show the converted value followed by the
    /// percentage, e.g. `3.30 (90.0%)`.
    #[must_use]
    pub fn format_grade(&self, grade: Option<f64>) -> String {
        match (self.system, grade) {
            (_, None) => "N/A".to_string(),
            (GradingSystem::Percentage, Some(g)) => GradingSystem::Percentage.format_grade(g),
            (GradingSystem::FourPoint, Some(g)) => format!(
                "{} ({})",
                GradingSystem::FourPoint
                    .format_grade(normalize(g, GradingSystem::Percentage, self.system)),
                GradingSystem::Percentage.format_grade(g)
            ),
        }
    }

    /// The year flagged active, if any
    #[must_use]
    pub fn active_year(&self) -> Option<&YearSummary> {
        self.years.iter().find(|y| y.is_active)
    }

    /// Number of overdue assessments across the record
    #[must_use]
    pub fn overdue_total(&self) -> usize {
        self.deadlines.iter().filter(|d| d.is_overdue).count()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, summary: &StudentSummary, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(summary)?;
        std::fs::write(output_path, report_content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, summary: &StudentSummary) -> Result<String, Box<dyn Error>>;
}
