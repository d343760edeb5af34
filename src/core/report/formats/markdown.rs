//! Markdown report generator
//!
//! Fills the embedded template with the figures from a [`StudentSummary`].
//! The output renders well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportGenerator, StudentSummary, YearSummary};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, summary: &StudentSummary) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Header metadata
        output = output.replace("{{student_name}}", &summary.name);
        output = output.replace(
            "{{student_number}}",
            summary.student_number.as_deref().unwrap_or("-"),
        );
        output = output.replace("{{university}}", or_dash(&summary.university));
        output = output.replace("{{course}}", or_dash(&summary.course));
        output = output.replace("{{grading_system}}", summary.system.display_name());
        output = output.replace(
            "{{generated_at}}",
            &summary.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        );

        // Overall figures
        output = output.replace(
            "{{overall_average}}",
            &summary.format_grade(summary.overall_average),
        );
        output = output.replace("{{classification}}", &summary.classification.to_string());
        output = output.replace(
            "{{modules_completed}}",
            &format!(
                "{} / {}",
                summary.progress.completed_modules, summary.progress.total_modules
            ),
        );
        output = output.replace(
            "{{credits_completed}}",
            &format!(
                "{} / {}",
                summary.progress.completed_credits, summary.progress.total_credits
            ),
        );
        output = output.replace(
            "{{completion_rate}}",
            &summary
                .completion_rate
                .map_or_else(|| "N/A".to_string(), |r| format!("{r:.0}%")),
        );
        output = output.replace(
            "{{trend}}",
            &summary
                .trend
                .map_or_else(|| "N/A".to_string(), |t| t.to_string()),
        );

        output = output.replace("{{year_sections}}", &Self::generate_year_sections(summary));
        output = output.replace("{{deadlines}}", &Self::generate_deadline_table(summary));
        output = output.replace(
            "{{distribution}}",
            &Self::generate_distribution_table(summary),
        );

        output
    }

    /// One section per academic year with a module table
    fn generate_year_sections(summary: &StudentSummary) -> String {
        let mut sections = String::new();

        for year in &summary.years {
            let _ = writeln!(sections, "## {}\n", Self::year_heading(year));
            let _ = writeln!(
                sections,
                "Average: **{}** ({}), credits {} / {}, multiplier {}\n",
                summary.format_grade(year.rollup.average),
                year.classification,
                year.rollup.completed_credits,
                year.rollup.total_credits,
                year.rollup.weighting_multiplier
            );

            if year.modules.is_empty() {
                sections.push_str("_No modules recorded._\n\n");
                continue;
            }

            sections.push_str(
                "| Module | Name | Credits | Current | Completion | Projected | Classification |\n",
            );
            sections.push_str("|---|---|---|---|---|---|---|\n");

            for module in &year.modules {
                let _ = writeln!(
                    sections,
                    "| {} | {} | {} | {} | {:.0}% | {} | {} |",
                    module.code,
                    module.name,
                    module.credits,
                    summary.format_grade(module.grade.current_grade),
                    module.grade.completion * 100.0,
                    summary.format_grade(Some(module.projected_grade)),
                    module.classification
                );
            }
            sections.push('\n');
        }

        sections
    }

    fn year_heading(year: &YearSummary) -> String {
        if year.is_active {
            format!("{} (current)", year.rollup.name)
        } else {
            year.rollup.name.clone()
        }
    }

    fn generate_deadline_table(summary: &StudentSummary) -> String {
        if summary.deadlines.is_empty() {
            return "_No outstanding deadlines._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Module | Assessment | Due | Status |\n");
        table.push_str("|---|---|---|---|\n");
        for deadline in &summary.deadlines {
            let status = if deadline.is_overdue {
                format!("⚠️ {}", deadline.describe())
            } else {
                deadline.describe()
            };
            let _ = writeln!(
                table,
                "| {} | {} | {} | {status} |",
                deadline.module_code,
                deadline.assessment,
                deadline.due_date.format("%Y-%m-%d")
            );
        }
        table
    }

    fn generate_distribution_table(summary: &StudentSummary) -> String {
        let mut table = String::new();
        table.push_str("| Bracket | Modules |\n");
        table.push_str("|---|---|\n");
        for (bracket, count) in &summary.distribution {
            let _ = writeln!(table, "| {bracket} | {count} |");
        }
        table
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, summary: &StudentSummary) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classification::ClassificationScheme;
    use crate::core::models::GradingSystem;
    use crate::core::report::tests::{now, sample_student};
    use tempfile::tempdir;

    fn summary() -> StudentSummary {
        StudentSummary::build_at(
            &sample_student(GradingSystem::Percentage),
            ClassificationScheme::canonical(),
            now(),
        )
    }

    #[test]
    fn test_render_fills_every_placeholder() {
        let output = MarkdownReporter::new().render(&summary()).unwrap();

        assert!(!output.contains("{{"), "unfilled placeholder in:\n{output}");
        assert!(output.starts_with("# Academic Report: Alex"));
        assert!(output.contains("| **Overall Average** | 69.5% |"));
        assert!(output.contains("| **Classification** | Upper Second (2:1) |"));
        assert!(output.contains("## Year 2 (current)"));
        assert!(output.contains("| CS201 | Algorithms | 20 | 74.0% | 40% | 89.6% | First Class |"));
        assert!(output.contains("| 70-79% | 2 |"));
    }

    #[test]
    fn test_deadlines_table() {
        let output = MarkdownReporter::new().render(&summary()).unwrap();
        assert!(output.contains("| CS201 | Exam | 2025-03-05 | due in 4 days |"));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.md");

        MarkdownReporter::new().generate(&summary(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("BSc Computer Science"));
    }
}
