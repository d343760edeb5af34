//! CLI command handlers for `GradeTracker`.
//!
//! Each subcommand is implemented in its own submodule. Handlers that read a
//! student record return `Err(String)` for the entry point to print.

pub mod config;
pub mod convert;
pub mod report;
pub mod summary;
pub mod target;

use grade_tracker::config::Config;
use grade_tracker::core::classification::ClassificationScheme;
use grade_tracker::core::record::load_student_record;
use grade_tracker::debug;
use grade_tracker::models::Student;
use std::path::{Path, PathBuf};

/// Resolve a record path: as given if it exists, otherwise relative to the
/// configured records directory.
pub fn resolve_record_path(record: &Path, config: &Config) -> PathBuf {
    if record.exists() || record.is_absolute() || config.paths.records_dir.is_empty() {
        return record.to_path_buf();
    }
    let candidate = Path::new(&config.paths.records_dir).join(record);
    if candidate.exists() {
        debug!("Resolved {} to {}", record.display(), candidate.display());
        candidate
    } else {
        record.to_path_buf()
    }
}

/// Load a record and the configured classification scheme
pub fn load(record: &Path, config: &Config) -> Result<(Student, ClassificationScheme), String> {
    let path = resolve_record_path(record, config);
    let student = load_student_record(&path, config.grading_system()?)?;
    let scheme = config
        .classification_scheme()
        .map_err(|e| format!("Invalid classification thresholds in config: {e}"))?;
    Ok((student, scheme))
}
