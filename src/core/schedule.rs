//! Deadline tracking
//!
//! Simple date arithmetic over assessment due dates. The current instant is
//! always passed in so results depend only on the inputs.

use crate::core::models::{Assessment, Module, Student};
use chrono::{DateTime, Utc};

/// Whole days from `now` until the due date, truncated toward zero.
/// Negative once the due date has passed; `None` without a due date.
#[must_use]
pub fn days_until_due(assessment: &Assessment, now: DateTime<Utc>) -> Option<i64> {
    assessment.due_date.map(|due| (due - now).num_days())
}

/// Whether the due date has passed while the assessment is still outstanding
#[must_use]
pub fn is_overdue(assessment: &Assessment, now: DateTime<Utc>) -> bool {
    assessment.is_outstanding() && assessment.due_date.is_some_and(|due| due < now)
}

/// Number of overdue assessments in a module
#[must_use]
pub fn overdue_count(module: &Module, now: DateTime<Utc>) -> usize {
    module
        .assessments
        .iter()
        .filter(|a| is_overdue(a, now))
        .count()
}

/// An outstanding assessment with a due date, tagged with its module
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingAssessment<'a> {
    /// Code of the owning module
    pub module_code: &'a str,
    /// The assessment itself
    pub assessment: &'a Assessment,
    /// Due date
    pub due_date: DateTime<Utc>,
    /// Whole days until due (negative when overdue)
    pub days_until_due: i64,
    /// Whether the due date has passed
    pub is_overdue: bool,
}

/// Outstanding assessments with a due date across the whole record, earliest
/// first. Overdue work is included and sorts ahead of future deadlines.
#[must_use]
pub fn upcoming_assessments(student: &Student, now: DateTime<Utc>) -> Vec<UpcomingAssessment<'_>> {
    let mut upcoming: Vec<UpcomingAssessment<'_>> = student
        .modules()
        .flat_map(|module| {
            module.assessments.iter().filter_map(move |a| {
                let due = a.due_date?;
                if !a.is_outstanding() {
                    return None;
                }
                Some(UpcomingAssessment {
                    module_code: module.code.as_str(),
                    assessment: a,
                    due_date: due,
                    days_until_due: (due - now).num_days(),
                    is_overdue: due < now,
                })
            })
        })
        .collect();

    upcoming.sort_by_key(|u| u.due_date);
    upcoming
}

/// Days until the nearest deadline that has not yet passed
#[must_use]
pub fn days_to_next_deadline(student: &Student, now: DateTime<Utc>) -> Option<i64> {
    upcoming_assessments(student, now)
        .into_iter()
        .find(|u| !u.is_overdue)
        .map(|u| u.days_until_due)
}
