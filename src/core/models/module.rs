//! Module model

use super::{Assessment, GradingSystem};
use serde::{Deserialize, Serialize};

/// A taught module (course unit) and its assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Module code (e.g., "CS2001")
    pub code: String,

    /// Module name (e.g., "Algorithms and Data Structures")
    pub name: String,

    /// Credit value used to weight the module within its year
    pub credits: u32,

    /// Teaching term label (e.g., "Semester 1")
    #[serde(default)]
    pub term: String,

    /// Whether the module is compulsory
    #[serde(default)]
    pub is_core: bool,

    /// Grading system, copied from the owning student
    #[serde(default)]
    pub grading_system: GradingSystem,

    /// Assessments; weightings need not sum to 100
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

impl Module {
    /// Create a new module with no assessments
    ///
    /// # Arguments
    /// * `code` - Module code
    /// * `name` - Module name
    /// * `credits` - Credit value
    #[must_use]
    pub fn new(code: String, name: String, credits: u32) -> Self {
        Self {
            code,
            name,
            credits,
            term: String::new(),
            is_core: false,
            grading_system: GradingSystem::default(),
            assessments: Vec::new(),
        }
    }

    /// Add an assessment
    pub fn add_assessment(&mut self, assessment: Assessment) {
        self.assessments.push(assessment);
    }

    /// Builder-style variant of [`add_assessment`](Self::add_assessment)
    #[must_use]
    pub fn with_assessment(mut self, assessment: Assessment) -> Self {
        self.assessments.push(assessment);
        self
    }

    /// Number of assessments with a recorded score
    #[must_use]
    pub fn graded_count(&self) -> usize {
        self.assessments.iter().filter(|a| a.is_graded()).count()
    }
}
