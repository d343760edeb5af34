//! Core module: the grade aggregation and classification engine

pub mod aggregate;
pub mod classification;
pub mod config;
pub mod conversion;
pub mod models;
pub mod module_grade;
pub mod projection;
pub mod record;
pub mod report;
pub mod rollup;
pub mod schedule;
pub mod statistics;

/// Returns the current version of the `GradeTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
