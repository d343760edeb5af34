//! Plain-text summary for terminal output

use crate::core::report::{ReportGenerator, StudentSummary};
use std::error::Error;
use std::fmt::Write;

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_summary(summary: &StudentSummary) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "=== {} ===", summary.name)?;
        if let Some(number) = &summary.student_number {
            writeln!(out, "Student Number: {number}")?;
        }
        if !summary.course.is_empty() {
            writeln!(out, "Course: {}", summary.course)?;
        }
        if !summary.university.is_empty() {
            writeln!(out, "University: {}", summary.university)?;
        }
        writeln!(out, "System: {}", summary.system.display_name())?;
        writeln!(
            out,
            "Overall: {} ({})",
            summary.format_grade(summary.overall_average),
            summary.classification
        )?;
        writeln!(
            out,
            "Progress: {}/{} modules, {}/{} credits",
            summary.progress.completed_modules,
            summary.progress.total_modules,
            summary.progress.completed_credits,
            summary.progress.total_credits
        )?;
        if let Some(trend) = summary.trend {
            writeln!(out, "Trend: {trend}")?;
        }

        for year in &summary.years {
            let marker = if year.is_active { " *" } else { "" };
            writeln!(
                out,
                "\n{}{marker}: {} ({})",
                year.rollup.name,
                summary.format_grade(year.rollup.average),
                year.classification
            )?;
            for module in &year.modules {
                writeln!(
                    out,
                    "  {:<10} {:<30} {:>3} cr  {:>8}  {:>3.0}% done  best {}",
                    module.code,
                    module.name,
                    module.credits,
                    summary.format_grade(module.grade.current_grade),
                    module.grade.completion * 100.0,
                    summary.format_grade(Some(module.projected_grade))
                )?;
            }
        }

        if !summary.deadlines.is_empty() {
            writeln!(out, "\nDeadlines:")?;
            for deadline in &summary.deadlines {
                let flag = if deadline.is_overdue { "⚠️ " } else { "" };
                writeln!(
                    out,
                    "  {flag}{} {}: {}",
                    deadline.module_code,
                    deadline.assessment,
                    deadline.describe()
                )?;
            }
        }

        Ok(out)
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, summary: &StudentSummary) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_summary(summary)?)
    }
}
