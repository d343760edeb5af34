//! Student record loader
//!
//! Records are TOML documents mirroring [`Student`]:
//!
//! ```toml
//! name = "Alex Morgan"
//! grading_system = "percentage"
//!
//! [[academic_years]]
//! name = "Year 2"
//! level = 2
//! weighting_multiplier = 1.0
//! is_active = true
//!
//! [[academic_years.modules]]
//! code = "CS2001"
//! name = "Algorithms"
//! credits = 20
//!
//! [[academic_years.modules.assessments]]
//! name = "Coursework"
//! kind = "coursework"
//! weighting = 40.0
//! score = 68.0
//! due_date = "2025-03-14T17:00:00Z"
//! ```
//!
//! Due dates are RFC 3339 strings. A record without `grading_system` uses the
//! caller's default system.

use crate::core::models::{GradingSystem, Student};
use crate::core::module_grade::{total_weighting, FULL_WEIGHTING};
use crate::{debug, info, warn};
use std::fs;
use std::path::Path;

const WEIGHTING_TOLERANCE: f64 = 1e-6;

/// Parse a student record from TOML text
///
/// `default_system` applies when the record has no `grading_system` key. The
/// record's grading system is copied onto every module. Modules whose
/// weightings do not sum to 100 are accepted with a warning.
///
/// # Errors
/// Returns an error message if the TOML is malformed or does not match the
/// record schema.
pub fn parse_student_record(
    text: &str,
    default_system: GradingSystem,
) -> Result<Student, String> {
    let mut table: toml::Table = text
        .parse()
        .map_err(|e| format!("Invalid student record: {e}"))?;
    if !table.contains_key("grading_system") {
        let system = toml::Value::try_from(default_system)
            .map_err(|e| format!("Invalid student record: {e}"))?;
        debug!("Record has no grading_system, using {default_system:?}");
        table.insert("grading_system".to_string(), system);
    }
    let mut student: Student = toml::Value::Table(table)
        .try_into()
        .map_err(|e| format!("Invalid student record: {e}"))?;
    student.propagate_grading_system();

    for module in student.modules() {
        let total = total_weighting(module);
        if !module.assessments.is_empty() && (total - FULL_WEIGHTING).abs() > WEIGHTING_TOLERANCE {
            warn!(
                "Module {} weightings sum to {total:.1}, not {FULL_WEIGHTING:.0}",
                module.code
            );
        }
        debug!(
            "Module {}: {} assessments, {} graded",
            module.code,
            module.assessments.len(),
            module.graded_count()
        );
    }

    Ok(student)
}

/// Load a student record from a TOML file, see [`parse_student_record`]
///
/// # Errors
/// Returns an error message naming the file if it cannot be read or parsed.
pub fn load_student_record<P: AsRef<Path>>(
    path: P,
    default_system: GradingSystem,
) -> Result<Student, String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let student = parse_student_record(&content, default_system)
        .map_err(|e| format!("{}: {e}", path.display()))?;

    info!(
        "Loaded record for {} from {}: {} years, {} modules",
        student.name,
        path.display(),
        student.academic_years.len(),
        student.modules().count()
    );
    Ok(student)
}
