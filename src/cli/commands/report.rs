//! Report command handler
//!
//! Writes a Markdown or text report for a student record.

use grade_tracker::config::Config;
use grade_tracker::core::report::{ReportFormat, StudentSummary};
use grade_tracker::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `record` - Path to the student record
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, text)
/// * `config` - Configuration containing the default reports directory
pub fn run(
    record: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("{e}. Use: markdown (md) or text (txt)"))?;

    let (student, scheme) = super::load(record, config)?;
    let summary = StudentSummary::build(&student, &scheme);

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(record, format, config)?,
    };

    format
        .reporter()
        .generate(&summary, &output_path)
        .map_err(|e| {
            error!("Report generation failed for {}: {e}", record.display());
            format!("Failed to write {format} report: {e}")
        })?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    println!("\n=== Summary ===");
    println!("Student: {}", summary.name);
    println!(
        "Overall: {} ({})",
        summary.format_grade(summary.overall_average),
        summary.classification
    );
    println!(
        "Modules: {}/{} complete",
        summary.progress.completed_modules, summary.progress.total_modules
    );
    let overdue = summary.overdue_total();
    if overdue > 0 {
        println!("⚠️  {overdue} overdue assessment(s)");
    }

    Ok(())
}

/// `reports_dir/<record stem>_report.<ext>`, creating the directory
fn default_output_path(
    record: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = record
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("student");
    Ok(reports_dir.join(format!("{stem}_report.{}", format.extension())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_output_path() {
        let dir = tempdir().unwrap();
        let mut config = Config::from_defaults();
        config.paths.reports_dir = dir.path().join("out").to_string_lossy().to_string();

        let path =
            default_output_path(Path::new("records/alex.toml"), ReportFormat::Text, &config)
                .unwrap();
        assert_eq!(path, dir.path().join("out").join("alex_report.txt"));
        assert!(dir.path().join("out").is_dir());
    }

    #[test]
    fn test_run_writes_markdown_report() {
        let dir = tempdir().unwrap();
        let record = dir.path().join("jo.toml");
        std::fs::write(
            &record,
            "name = \"Jo\"\n\n[[academic_years]]\nname = \"Year 1\"\nweighting_multiplier = 1.0\n\n\
             [[academic_years.modules]]\ncode = \"M1\"\nname = \"Maths\"\ncredits = 20\n\n\
             [[academic_years.modules.assessments]]\nname = \"Exam\"\nweighting = 100.0\nscore = 71.0\n",
        )
        .unwrap();
        let output = dir.path().join("jo.md");

        run(&record, Some(&output), "md", &Config::from_defaults()).unwrap();
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("First Class"));
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let err = run(Path::new("x.toml"), None, "pdf", &Config::from_defaults()).unwrap_err();
        assert!(err.contains("Unknown report format"));
    }
}
