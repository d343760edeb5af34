//! Data models for `GradeTracker`
//!
//! These are read-only inputs to the engine. The host application owns and
//! mutates them; the engine only reads a snapshot.

pub mod assessment;
pub mod grading_system;
pub mod module;
pub mod student;
pub mod year;

pub use assessment::{Assessment, AssessmentKind};
pub use grading_system::GradingSystem;
pub use module::Module;
pub use student::Student;
pub use year::AcademicYear;
