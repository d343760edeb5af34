//! Assessment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of assessed work
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    /// Written or practical examination
    #[default]
    Exam,
    /// General coursework
    Coursework,
    /// Essay
    Essay,
    /// Presentation
    Presentation,
    /// Laboratory work
    LabWork,
    /// Project
    Project,
    /// Participation marks
    Participation,
    /// Quiz
    Quiz,
    /// Dissertation
    Dissertation,
}

impl AssessmentKind {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exam => "Exam",
            Self::Coursework => "Coursework",
            Self::Essay => "Essay",
            Self::Presentation => "Presentation",
            Self::LabWork => "Lab Work",
            Self::Project => "Project",
            Self::Participation => "Participation",
            Self::Quiz => "Quiz",
            Self::Dissertation => "Dissertation",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single piece of assessed work within a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Assessment name (e.g., "Final Exam")
    pub name: String,

    /// Kind of assessment
    #[serde(default)]
    pub kind: AssessmentKind,

    /// Percentage contribution to the owning module (0-100)
    pub weighting: f64,

    /// Score as a percentage; present only once graded
    #[serde(default)]
    pub score: Option<f64>,

    /// Manual completion flag (submitted). Grading is decided by `score`.
    #[serde(default)]
    pub is_completed: bool,

    /// When the assessment is due
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    /// Marker feedback
    #[serde(default)]
    pub feedback: String,
}

impl Assessment {
    /// Create a new, ungraded assessment
    ///
    /// # Arguments
    /// * `name` - Assessment name
    /// * `kind` - Kind of assessment
    /// * `weighting` - Percentage of the module this assessment is worth
    #[must_use]
    pub const fn new(name: String, kind: AssessmentKind, weighting: f64) -> Self {
        Self {
            name,
            kind,
            weighting,
            score: None,
            is_completed: false,
            due_date: None,
            feedback: String::new(),
        }
    }

    /// Builder-style: record a score and mark the assessment completed
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self.is_completed = true;
        self
    }

    /// Builder-style: set the due date
    #[must_use]
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Whether a score has been recorded
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.score.is_some()
    }

    /// Whether the assessment still needs work: not submitted and not graded
    #[must_use]
    pub const fn is_outstanding(&self) -> bool {
        !self.is_completed && self.score.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_creation() {
        let assessment = Assessment::new("Midterm".to_string(), AssessmentKind::Exam, 40.0);

        assert_eq!(assessment.name, "Midterm");
        assert!((assessment.weighting - 40.0).abs() < f64::EPSILON);
        assert!(!assessment.is_graded());
        assert!(assessment.is_outstanding());
        assert!(assessment.due_date.is_none());
    }

    #[test]
    fn test_with_score_marks_completed() {
        let assessment =
            Assessment::new("Essay 1".to_string(), AssessmentKind::Essay, 20.0).with_score(71.0);

        assert!(assessment.is_graded());
        assert!(assessment.is_completed);
        assert!(!assessment.is_outstanding());
    }

    #[test]
    fn test_completed_but_ungraded_is_not_outstanding() {
        let mut assessment =
            Assessment::new("Report".to_string(), AssessmentKind::Project, 30.0);
        assessment.is_completed = true;

        assert!(!assessment.is_graded());
        assert!(!assessment.is_outstanding());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(AssessmentKind::LabWork.to_string(), "Lab Work");
        assert_eq!(AssessmentKind::default(), AssessmentKind::Exam);
    }
}
