//! Shared library for `GradeTracker`
//! Contains the grade aggregation and classification engine used by the CLI
//! and by any host application that supplies a student record.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version, models};
