//! Summary command handler: prints the text report for a record

use grade_tracker::config::Config;
use grade_tracker::core::report::{ReportGenerator, StudentSummary, TextReporter};
use grade_tracker::{info, verbose};
use std::path::Path;

/// Run the summary command.
pub fn run(record: &Path, config: &Config) -> Result<(), String> {
    let (student, scheme) = super::load(record, config)?;
    let summary = StudentSummary::build(&student, &scheme);

    let text = TextReporter::new()
        .render(&summary)
        .map_err(|e| format!("Failed to render summary: {e}"))?;
    print!("{text}");

    if let Some(rate) = summary.completion_rate {
        verbose!("\n{rate:.0}% of assessments graded");
    }
    info!("Summary printed for {}", student.name);
    Ok(())
}
