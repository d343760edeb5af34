//! Integration smoke tests for `grade_tracker`

use grade_tracker::core::classification::classify;
use grade_tracker::get_version;
use grade_tracker::models::GradingSystem;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn undefined_average_is_not_a_fail() {
    let result = classify(None, GradingSystem::Percentage);
    assert!(!result.is_classified());
    assert_eq!(result.to_string(), "No classification yet");
}
