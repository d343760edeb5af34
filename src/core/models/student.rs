//! Student model

use super::{AcademicYear, GradingSystem, Module};
use serde::{Deserialize, Serialize};

/// A student's full academic record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Student name
    pub name: String,

    /// Institution-issued student number
    #[serde(default)]
    pub student_number: Option<String>,

    /// University name
    #[serde(default)]
    pub university: String,

    /// Course of study (e.g., "BSc Computer Science")
    #[serde(default)]
    pub course: String,

    /// Grading convention for the whole record
    #[serde(default)]
    pub grading_system: GradingSystem,

    /// Years of study, in the order supplied
    #[serde(default)]
    pub academic_years: Vec<AcademicYear>,
}

impl Student {
    /// Create a new student with no years
    #[must_use]
    pub const fn new(name: String, grading_system: GradingSystem) -> Self {
        Self {
            name,
            student_number: None,
            university: String::new(),
            course: String::new(),
            grading_system,
            academic_years: Vec::new(),
        }
    }

    /// Add an academic year
    pub fn add_year(&mut self, year: AcademicYear) {
        self.academic_years.push(year);
    }

    /// Builder-style variant of [`add_year`](Self::add_year)
    #[must_use]
    pub fn with_year(mut self, year: AcademicYear) -> Self {
        self.academic_years.push(year);
        self
    }

    /// First year flagged active. More than one may be flagged; the first wins.
    #[must_use]
    pub fn active_year(&self) -> Option<&AcademicYear> {
        self.academic_years.iter().find(|y| y.is_active)
    }

    /// Iterate over every module in every year
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.academic_years.iter().flat_map(|y| y.modules.iter())
    }

    /// Look up a module by code across all years (case-insensitive)
    #[must_use]
    pub fn find_module(&self, code: &str) -> Option<&Module> {
        self.academic_years.iter().find_map(|y| y.get_module(code))
    }

    /// Copy the student's grading system onto every module
    pub fn propagate_grading_system(&mut self) {
        let system = self.grading_system;
        for module in self
            .academic_years
            .iter_mut()
            .flat_map(|y| y.modules.iter_mut())
        {
            module.grading_system = system;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        let mut year1 = AcademicYear::new("Year 1".to_string(), 1, 0.0);
        year1.add_module(Module::new("CS1001".to_string(), "Intro".to_string(), 20));
        let mut year2 = AcademicYear::new("Year 2".to_string(), 2, 1.0);
        year2.is_active = true;
        year2.add_module(Module::new("CS2001".to_string(), "Algorithms".to_string(), 20));

        Student::new("Sam".to_string(), GradingSystem::FourPoint)
            .with_year(year1)
            .with_year(year2)
    }

    #[test]
    fn test_active_year() {
        let student = sample();
        assert_eq!(student.active_year().map(|y| y.name.as_str()), Some("Year 2"));
    }

    #[test]
    fn test_find_module_across_years() {
        let student = sample();
        assert!(student.find_module("cs1001").is_some());
        assert!(student.find_module("CS2001").is_some());
        assert_eq!(student.modules().count(), 2);
    }

    #[test]
    fn test_propagate_grading_system() {
        let mut student = sample();
        assert!(student
            .modules()
            .all(|m| m.grading_system == GradingSystem::Percentage));

        student.propagate_grading_system();
        assert!(student
            .modules()
            .all(|m| m.grading_system == GradingSystem::FourPoint));
    }
}
