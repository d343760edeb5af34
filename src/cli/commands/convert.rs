//! Convert command handler

use grade_tracker::config::Config;
use grade_tracker::core::classification::{Classification, ClassificationScheme};
use grade_tracker::core::conversion::normalize;
use grade_tracker::models::GradingSystem;

/// The system a value is converted to when `--to` is omitted
const fn other(system: GradingSystem) -> GradingSystem {
    match system {
        GradingSystem::Percentage => GradingSystem::FourPoint,
        GradingSystem::FourPoint => GradingSystem::Percentage,
    }
}

/// Run the convert command.
pub fn run(
    value: f64,
    from: Option<GradingSystem>,
    to: Option<GradingSystem>,
    config: &Config,
) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("Cannot convert non-finite value {value}"));
    }
    let from = match from {
        Some(system) => system,
        None => config.grading_system()?,
    };
    let to = to.unwrap_or_else(|| other(from));
    let scheme = config.classification_scheme()?;
    let (converted, classification) = convert_and_classify(value, from, to, &scheme);

    println!(
        "{} ({}) → {} ({})",
        from.format_grade(value),
        from.display_name(),
        to.format_grade(converted),
        to.display_name()
    );
    println!("Classification: {classification}");
    Ok(())
}

/// Convert `value` and classify the result with the configured scheme
fn convert_and_classify(
    value: f64,
    from: GradingSystem,
    to: GradingSystem,
    scheme: &ClassificationScheme,
) -> (f64, Classification) {
    let converted = normalize(value, from, to);
    (converted, scheme.classify(Some(converted), to))
}
